use std::{env, net::SocketAddr, sync::Arc};

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::auth::service::{AuthConfig, AuthService};
use service::property::InMemoryPropertyStore;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Restrict cross-origin access to the single configured frontend origin.
pub fn build_cors(allowed_origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = allowed_origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(5001);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Resolve the allowed CORS origin from configs or env, defaulting to the
/// local Vite dev server.
fn load_allowed_origin() -> String {
    match configs::load_default() {
        Ok(cfg) => cfg.cors.allowed_origin,
        Err(_) => env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string()),
    }
}

/// Assemble the application state: the in-memory property store and the
/// simulated auth service.
pub fn build_state() -> ServerState {
    ServerState {
        properties: InMemoryPropertyStore::new(),
        auth: Arc::new(AuthService::new(AuthConfig::default())),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cors = build_cors(&load_allowed_origin())?;
    let state = build_state();
    let app: Router = routes::build_router(state, cors);

    let addr = load_bind_addr()?;
    info!(%addr, "starting rural marketplace backend");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
