//! Interaction Handlers
//!
//! Parses gate-approved request bodies and dispatches on interaction type.

use axum::Json;
use bytes::Bytes;
use tracing::instrument;

use super::commands;
use super::error::InteractionError;
use super::types::{Interaction, InteractionResponse, InteractionType};

/// Handle `POST /`.
///
/// The signature gate has already verified these exact bytes; parsing here
/// is the second, independent consumer of the buffered body.
#[instrument(skip_all)]
pub async fn handle_interaction(
    body: Bytes,
) -> Result<Json<InteractionResponse>, InteractionError> {
    let interaction = parse(&body)?;
    Ok(Json(dispatch(&interaction)?))
}

/// Parse a raw body into an interaction.
fn parse(body: &[u8]) -> Result<Interaction, InteractionError> {
    serde_json::from_slice(body).map_err(|_| InteractionError::MalformedRequest)
}

/// Dispatch a parsed interaction to its response.
///
/// Pure function of its input: identical interactions always produce
/// identical responses.
pub fn dispatch(interaction: &Interaction) -> Result<InteractionResponse, InteractionError> {
    match interaction.kind {
        // Liveness check; the fastest path, no payload inspection
        InteractionType::Ping => Ok(InteractionResponse::pong()),
        InteractionType::ApplicationCommand => interaction.data.as_ref().map_or_else(
            || Ok(InteractionResponse::message(commands::DEFAULT_GREETING)),
            commands::run,
        ),
        InteractionType::Unknown(_) => {
            Ok(InteractionResponse::message(commands::DEFAULT_GREETING))
        }
    }
}
