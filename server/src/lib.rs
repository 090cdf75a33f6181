//! Ix Server
//!
//! Webhook endpoint for a third-party interaction platform. Every inbound
//! request is authenticated with a detached Ed25519 signature before the
//! interaction dispatcher runs.

pub mod api;
pub mod config;
pub mod interactions;
pub mod signature;
