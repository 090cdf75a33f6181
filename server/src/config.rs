//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000")
    pub bind_address: String,

    /// Platform-issued Ed25519 public key (32-byte hex string) used to
    /// verify inbound request signatures
    pub client_public_key: String,

    /// Maximum accepted request body size in bytes (default: 1MB)
    pub max_body_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CLIENT_PUBLIC_KEY` is required: without it the signature gate could
    /// never pass and the service would reject all traffic.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".into()),
            client_public_key: env::var("CLIENT_PUBLIC_KEY")
                .context("CLIENT_PUBLIC_KEY must be set")?,
            max_body_size: env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
        })
    }

    /// Create a default configuration for testing.
    ///
    /// The public key is a placeholder; tests that exercise the signature
    /// gate overwrite it with the hex encoding of a generated test key.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".into(),
            client_public_key: String::new(),
            max_body_size: 1024 * 1024,
        }
    }
}
