use serde::{Deserialize, Serialize};

/// Registration input. Fields are optional so presence checks surface as
/// validation errors instead of deserialization failures; the password may
/// arrive under either `password` or `senha` (legacy frontend field name).
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub senha: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Login input.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Registration result (business view). The id is always 1: users are
/// fabricated per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// User view attached to a login session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub username: String,
    pub role: String,
    pub email: String,
}

/// Successful registration outcome.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub user: RegisteredUser,
    pub token: String,
}

/// Successful login outcome.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: SessionUser,
    pub token: String,
    pub message: &'static str,
}
