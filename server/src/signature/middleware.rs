//! Signature Verification Middleware
//!
//! Intercepts every request to the interactions route: buffers the raw
//! body, verifies the detached signature, then replays the exact verified
//! bytes to the downstream handler.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::AppState;

use super::error::SignatureError;
use super::verify;

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
/// Header carrying the timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Middleware to require a valid request signature.
///
/// Apply to routes that receive platform traffic:
/// ```ignore
/// Router::new()
///     .route("/", post(handler))
///     .layer(axum::middleware::from_fn_with_state(state, require_signature))
/// ```
///
/// On failure the handler never runs and the client gets an opaque 401;
/// the rejected variant is logged at debug level, never key material.
pub async fn require_signature(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, SignatureError> {
    match authenticate(&state, request).await {
        Ok(request) => Ok(next.run(request).await),
        Err(e) => {
            debug!(error = %e, "Rejected unsigned or badly signed request");
            Err(e)
        }
    }
}

/// Verify the request signature and rebuild the request for the handler.
async fn authenticate(state: &AppState, request: Request) -> Result<Request, SignatureError> {
    let (parts, body) = request.into_parts();

    let signature = header_value(&parts.headers, SIGNATURE_HEADER)?.to_owned();
    let timestamp = header_value(&parts.headers, TIMESTAMP_HEADER)?.to_owned();

    // Buffer the body once; verification and JSON parsing are two
    // independent consumers of the same bytes
    let bytes = to_bytes(body, state.config.max_body_size)
        .await
        .map_err(|_| SignatureError::UnreadableBody)?;

    verify::verify_signature(&state.verifying_key, &timestamp, &bytes, &signature)?;

    // Hand the handler the exact bytes that were verified
    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// Extract a required, non-empty header as UTF-8.
fn header_value<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, SignatureError> {
    let value = headers
        .get(name)
        .ok_or(SignatureError::MissingHeader(name))?
        .to_str()
        .map_err(|_| SignatureError::InvalidHeader(name))?;

    if value.is_empty() {
        return Err(SignatureError::InvalidHeader(name));
    }

    Ok(value)
}
