use thiserror::Error;

/// Business errors for auth workflows.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}
