//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Localhost-only CORS by default
//! - Graceful shutdown
//! - JSON `{"error": ...}` responses for every failure

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{App, AppState, ServerConfig, ServerError};
