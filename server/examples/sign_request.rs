//! Generate a throwaway keypair and signed headers for a request body, for
//! exercising the endpoint locally:
//!
//! ```text
//! cargo run --example sign_request -- '{"type":1}'
//! ```

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let body = std::env::args()
        .nth(1)
        .expect("Usage: sign_request <json-body>");

    let signing_key = SigningKey::generate(&mut OsRng);
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs()
        .to_string();

    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body.as_bytes());
    let signature = hex::encode(signing_key.sign(&message).to_bytes());

    println!(
        "CLIENT_PUBLIC_KEY={}",
        hex::encode(signing_key.verifying_key().to_bytes())
    );
    println!("X-Signature-Ed25519: {signature}");
    println!("X-Signature-Timestamp: {timestamp}");
}
