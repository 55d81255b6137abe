use chrono::{DateTime, Utc};
use serde::Serialize;

/// Healthcheck payload returned by `GET /api/health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub ok: bool,
    pub message: &'static str,
    pub time: DateTime<Utc>,
}

impl Health {
    pub fn now() -> Self {
        Self {
            ok: true,
            message: "Servidor rodando corretamente!",
            time: Utc::now(),
        }
    }
}
