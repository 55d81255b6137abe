//! Auth module: domain types, errors, and the simulated auth service.
//!
//! This module centralizes registration and login business logic under the
//! service crate. Nothing here persists: the demo backend fabricates users
//! per request and hands out a placeholder token.

pub mod domain;
pub mod errors;
pub mod service;

pub use service::AuthService;
