//! Command Handlers
//!
//! The closed set of slash commands this endpoint answers.

use super::error::InteractionError;
use super::types::{CommandData, InteractionResponse};

/// Greeting returned for anything the endpoint does not explicitly handle.
pub(crate) const DEFAULT_GREETING: &str = "Hello world";

/// Run a named command.
///
/// `hi` greets the display name passed as the command's first option,
/// visible only to the invoking user. A `hi` invocation with no options is
/// a client error, not a panic. Unrecognized commands fall through to the
/// default greeting.
pub(crate) fn run(data: &CommandData) -> Result<InteractionResponse, InteractionError> {
    match data.name.as_str() {
        "hi" => {
            let name = data
                .options
                .first()
                .map(|opt| opt.value.as_str())
                .ok_or(InteractionError::MissingOption("name"))?;

            Ok(InteractionResponse::ephemeral_message(format!(
                "Hello {name}"
            )))
        }
        _ => Ok(InteractionResponse::message(DEFAULT_GREETING)),
    }
}
