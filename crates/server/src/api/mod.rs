//! HTTP endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! The shared error type and its response mapping live here in mod.rs.

mod health;
mod points;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use proximity_core::QueryError;

// ── Shared error type ────────────────────────────────────────────

/// Per-request failures. Every variant becomes a status code plus a
/// plain-text body; none of them escape the handler.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client. Internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            ApiError::Serialization(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Serialization(e) => error!("Error: {}", e),
            ApiError::Query(e) => debug!(parameter = e.parameter(), "Rejected request: {}", e),
            ApiError::MethodNotAllowed => debug!("Rejected request: {}", self),
        }
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message(),
        )
            .into_response()
    }
}

// ── Re-exports ───────────────────────────────────────────────────
// Flat `api::foo` paths used by router.rs route registration.

pub use health::health;
pub use points::points;
