use models::user::{self, ROLE_PRODUTOR, ROLE_PROPRIETARIO};
use tracing::{info, instrument};

use super::domain::{AuthSession, LoginInput, RegisterInput, Registration, RegisteredUser, SessionUser};
use super::errors::AuthError;

/// Every fabricated user carries this id; registrations are never stored.
const DEMO_USER_ID: u64 = 1;

/// Auth service configuration. Defaults carry the demo literals the
/// reference frontend expects.
#[derive(Clone)]
pub struct AuthConfig {
    pub token: String,
    pub admin_username: String,
    pub admin_password: String,
    pub admin_email: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: "fake-demo-token".into(),
            admin_username: "admin".into(),
            admin_password: "123".into(),
            admin_email: "admin@arrendafacil.com".into(),
        }
    }
}

/// Auth business service independent of the web framework.
///
/// Login is simulated: the fixed admin pair gets the privileged role, any
/// other non-empty pair is accepted as a producer. Callers deciding to wire a
/// real credential store should replace this service wholesale.
pub struct AuthService {
    cfg: AuthConfig,
}

impl AuthService {
    pub fn new(cfg: AuthConfig) -> Self { Self { cfg } }

    /// Validate a registration payload and fabricate the resulting user.
    #[instrument(skip(self, input))]
    pub fn register(&self, input: RegisterInput) -> Result<Registration, AuthError> {
        let username = user::normalize_username(input.username.as_deref().unwrap_or(""));
        let email = user::normalize_email(input.email.as_deref().unwrap_or(""));
        let password = input.password.or(input.senha).unwrap_or_default();
        let role = input
            .role
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| ROLE_PRODUTOR.to_string());

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation("Informe usuário, e-mail e senha.".into()));
        }
        user::validate_email(&email)?;

        let registered = RegisteredUser { id: DEMO_USER_ID, username, email, role };
        info!(
            username = %registered.username,
            email = %registered.email,
            role = %registered.role,
            "novo usuário registrado"
        );

        Ok(Registration { user: registered, token: self.cfg.token.clone() })
    }

    /// Authenticate a login payload. Only the fixed admin pair is checked for
    /// real; everything else succeeds with the default role.
    #[instrument(skip(self, input))]
    pub fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let username = user::normalize_username(input.username.as_deref().unwrap_or(""));
        let password = input.password.unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            return Err(AuthError::Validation("Informe usuário e senha.".into()));
        }

        if username == self.cfg.admin_username && password == self.cfg.admin_password {
            return Ok(AuthSession {
                user: SessionUser {
                    username,
                    role: ROLE_PROPRIETARIO.to_string(),
                    email: self.cfg.admin_email.clone(),
                },
                token: self.cfg.token.clone(),
                message: "Login realizado com sucesso!",
            });
        }

        let email = format!("{}@exemplo.com", username);
        Ok(AuthSession {
            user: SessionUser { username, role: ROLE_PRODUTOR.to_string(), email },
            token: self.cfg.token.clone(),
            message: "Login simulado com sucesso!",
        })
    }
}
