//! Error types for the report gateway.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system.
//!
//! Upstream responses with non-2xx status codes are not errors: handlers
//! relay them to the caller verbatim. The variants here cover local
//! failures only (missing credentials, bad input, unreachable or
//! garbled upstream).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Auth errors
    #[error("Authorization header is required")]
    Unauthorized,

    // Validation errors
    #[error("{0}")]
    MissingField(String),

    // Upstream errors
    #[error("Invalid response from server")]
    UpstreamInvalidResponse,

    #[error("{0}")]
    UpstreamUnreachable(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 401
            Self::Unauthorized => StatusCode::UNAUTHORIZED,

            // 400
            Self::MissingField(_) => StatusCode::BAD_REQUEST,

            // 500
            Self::UpstreamInvalidResponse
            | Self::UpstreamUnreachable(_)
            | Self::Internal(_)
            | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
