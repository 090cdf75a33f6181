//! Reusable test helpers for HTTP integration tests.
//!
//! Builds the full router around a freshly generated Ed25519 keypair and
//! constructs signed (or deliberately broken) interaction requests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, Request};
use axum::Router;
use ed25519_dalek::{Signer, SigningKey};
use http_body_util::BodyExt;
use rand::rngs::OsRng;

use ix_server::api::{create_router, AppState};
use ix_server::config::Config;
use ix_server::signature::{parse_verifying_key, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Timestamp used by default for signed test requests.
pub const TEST_TIMESTAMP: &str = "1700000000";

/// The application router wired to a test keypair.
pub struct TestApp {
    /// Full application router.
    pub router: Router,
    /// Private half of the test keypair; signs request bodies.
    pub signing_key: SigningKey,
}

impl TestApp {
    /// Build the application around a freshly generated keypair.
    pub fn new() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);

        let mut config = Config::default_for_test();
        config.client_public_key = hex::encode(signing_key.verifying_key().to_bytes());

        let verifying_key =
            parse_verifying_key(&config.client_public_key).expect("test key should parse");
        let state = AppState::new(config, verifying_key);

        Self {
            router: create_router(state),
            signing_key,
        }
    }

    /// Hex-encoded signature over `timestamp ∥ body` with the app's key.
    pub fn sign(&self, timestamp: &str, body: &str) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body.as_bytes());
        hex::encode(self.signing_key.sign(&message).to_bytes())
    }

    /// A correctly signed interactions request.
    pub fn signed_request(&self, body: &str) -> Request<Body> {
        let signature = self.sign(TEST_TIMESTAMP, body);
        interactions_request(Some(&signature), Some(TEST_TIMESTAMP), body)
    }
}

/// Build a `POST /` request with whichever signature headers are given.
pub fn interactions_request(
    signature: Option<&str>,
    timestamp: Option<&str>,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/json");

    if let Some(signature) = signature {
        builder = builder.header(SIGNATURE_HEADER, signature);
    }
    if let Some(timestamp) = timestamp {
        builder = builder.header(TIMESTAMP_HEADER, timestamp);
    }

    builder
        .body(Body::from(body.to_owned()))
        .expect("request should build")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}
