use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use service::auth::domain::{LoginInput, RegisterInput, RegisteredUser, SessionUser};
use service::auth::AuthService;
use service::property::PropertyRepository;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub properties: Arc<dyn PropertyRepository>,
    pub auth: Arc<AuthService>,
}

#[derive(Serialize)]
pub struct RegisterOutput {
    pub ok: bool,
    pub message: &'static str,
    pub user: RegisteredUser,
    pub token: String,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub ok: bool,
    pub message: &'static str,
    pub user: SessionUser,
    pub access_token: String,
}

pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<RegisterOutput>), ApiError> {
    let registration = state.auth.register(input)?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterOutput {
            ok: true,
            message: "Cadastro criado com sucesso.",
            user: registration.user,
            token: registration.token,
        }),
    ))
}

pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginOutput>, ApiError> {
    let session = state.auth.login(input)?;
    Ok(Json(LoginOutput {
        ok: true,
        message: session.message,
        user: session.user,
        access_token: session.token,
    }))
}
