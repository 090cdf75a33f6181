//! Ed25519 Signature Gate
//!
//! Authenticates every inbound interaction request before business logic
//! runs. The platform sends a detached signature over the request timestamp
//! concatenated with the raw body; requests that fail verification are
//! rejected with a fixed 401 before any JSON parsing happens.

mod error;
mod middleware;
mod verify;

pub use error::SignatureError;
pub use middleware::{require_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};
pub use verify::{parse_verifying_key, verify_signature};
