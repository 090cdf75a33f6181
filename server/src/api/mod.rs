//! API Router and Application State
//!
//! Central routing configuration and shared state.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use ed25519_dalek::VerifyingKey;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{config::Config, interactions, signature};

/// Shared application state.
///
/// Everything in here is immutable for the process lifetime; requests only
/// ever read from it.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Platform public key used to verify inbound request signatures,
    /// parsed once at startup
    pub verifying_key: VerifyingKey,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, verifying_key: VerifyingKey) -> Self {
        Self {
            config: Arc::new(config),
            verifying_key,
        }
    }
}

/// Create the main application router.
///
/// The interactions route sits behind the signature gate; `/health` stays
/// outside it so that liveness probes do not need a signed body.
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    Router::new()
        .route("/", post(interactions::handle_interaction))
        .layer(from_fn_with_state(
            state.clone(),
            signature::require_signature,
        ))
        // Health check
        .route("/health", get(health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_body_size))
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
