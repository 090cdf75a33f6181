//! Signature Gate Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised while authenticating an inbound request signature.
///
/// Variants exist for server-side logging only; the client always sees the
/// same opaque 401.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// A required signature header is absent.
    #[error("Missing header: {0}")]
    MissingHeader(&'static str),

    /// A signature header is present but empty or not valid UTF-8.
    #[error("Invalid value for header: {0}")]
    InvalidHeader(&'static str),

    /// A field is not valid hex.
    #[error("Malformed hex in {0}")]
    MalformedHex(&'static str),

    /// A field decoded to the wrong number of bytes.
    #[error("Wrong length for {0}")]
    WrongLength(&'static str),

    /// The public key bytes do not form a valid Ed25519 point.
    #[error("Not a valid Ed25519 public key")]
    InvalidKey,

    /// The request body could not be buffered.
    #[error("Failed to read request body")]
    UnreadableBody,

    /// Cryptographic verification failed.
    #[error("Signature verification failed")]
    VerificationFailed,
}

impl IntoResponse for SignatureError {
    /// Every variant collapses to the same fixed 401 so the response never
    /// reveals which check failed.
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "Bad request signature").into_response()
    }
}
