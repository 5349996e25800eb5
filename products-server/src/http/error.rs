//! API error types with IntoResponse
//!
//! Every error becomes `{"error": message}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path id is not an integer (400)
    #[error("Invalid product ID")]
    InvalidId,

    /// Body is not a valid product payload (400)
    #[error("Invalid request payload")]
    InvalidPayload,

    /// No row matched the id (404)
    #[error("Product not found")]
    NotFound,

    /// Any other storage failure (500, logged)
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId | Self::InvalidPayload => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Storage(message) = &self {
            tracing::error!("Storage error: {}", message);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound,
            StoreError::Database(e) => Self::Storage(e.to_string()),
        }
    }
}
