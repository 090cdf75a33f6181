//! Ix Server - Main Entry Point
//!
//! Signed interactions webhook endpoint.

use anyhow::{Context, Result};
use tracing::info;

use ix_server::{api, config, signature};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ix_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting interactions endpoint"
    );

    // Parse the platform public key once; a key that cannot verify anything
    // must abort startup instead of rejecting every request at runtime
    let verifying_key = signature::parse_verifying_key(&config.client_public_key)
        .context("CLIENT_PUBLIC_KEY is not a valid Ed25519 public key")?;

    // Build application state and router
    let state = api::AppState::new(config.clone(), verifying_key);
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
