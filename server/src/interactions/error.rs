//! Interaction Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while dispatching an interaction.
///
/// These only arise after the signature gate has passed, so surfacing
/// detail to the (authenticated) platform is fine.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// Body is not a valid interaction payload.
    #[error("Request body is not a valid interaction")]
    MalformedRequest,

    /// A command was invoked without an option it requires.
    #[error("Missing required option: {0}")]
    MissingOption(&'static str),
}

/// Error response body for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::MalformedRequest => (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST"),
            Self::MissingOption(_) => (StatusCode::BAD_REQUEST, "MISSING_OPTION"),
        };

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
