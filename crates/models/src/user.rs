use crate::errors::ModelError;

/// Default role handed to self-registered users and simulated logins.
pub const ROLE_PRODUTOR: &str = "produtor";
/// Role granted to the fixed demo admin credentials.
pub const ROLE_PROPRIETARIO: &str = "proprietario";

/// Email is only required to look like one; the demo backend never sends mail.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') {
        return Err(ModelError::Validation("E-mail inválido.".into()));
    }
    Ok(())
}

/// Trim surrounding whitespace; usernames are otherwise unrestricted.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_string()
}

/// Emails compare case-insensitively, so store them lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_anything_with_an_at_sign() {
        assert!(validate_email("maria@exemplo.com").is_ok());
        assert!(validate_email("a@b").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        let err = validate_email("not-an-email").unwrap_err();
        assert_eq!(err.to_string(), "E-mail inválido.");
    }

    #[test]
    fn normalizes_username_and_email() {
        assert_eq!(normalize_username("  joao "), "joao");
        assert_eq!(normalize_email(" Maria@Exemplo.COM "), "maria@exemplo.com");
    }
}
