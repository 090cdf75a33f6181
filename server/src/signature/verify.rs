//! Ed25519 Verification Primitives
//!
//! Pure functions over the key and signature material; no request plumbing.

use ed25519_dalek::{Signature, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

use super::error::SignatureError;

/// Parse a hex-encoded 32-byte Ed25519 public key.
///
/// Called once at startup; the resulting key is immutable for the process
/// lifetime.
pub fn parse_verifying_key(key_hex: &str) -> Result<VerifyingKey, SignatureError> {
    let bytes = hex::decode(key_hex).map_err(|_| SignatureError::MalformedHex("public key"))?;
    let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
        .try_into()
        .map_err(|_| SignatureError::WrongLength("public key"))?;
    VerifyingKey::from_bytes(&bytes).map_err(|_| SignatureError::InvalidKey)
}

/// Verify a detached signature over `timestamp ∥ body`.
///
/// The platform signs the UTF-8 bytes of the timestamp immediately followed
/// by the raw body bytes, with no separator.
pub fn verify_signature(
    key: &VerifyingKey,
    timestamp: &str,
    body: &[u8],
    signature_hex: &str,
) -> Result<(), SignatureError> {
    let sig_bytes =
        hex::decode(signature_hex).map_err(|_| SignatureError::MalformedHex("signature"))?;
    let sig_bytes: [u8; SIGNATURE_LENGTH] = sig_bytes
        .try_into()
        .map_err(|_| SignatureError::WrongLength("signature"))?;
    let signature = Signature::from_bytes(&sig_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    key.verify_strict(&message, &signature)
        .map_err(|_| SignatureError::VerificationFailed)
}
