//! Interaction Wire Types
//!
//! Request and response payloads exchanged with the interaction platform.
//! Types are integer-tagged on the wire; unknown inbound tags are preserved
//! rather than rejected so they can fall through to the default response.

use bitflags::bitflags;
use serde::{Deserialize, Serialize, Serializer};

/// Inbound interaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    /// Liveness check from the platform.
    Ping,
    /// Slash command invocation.
    ApplicationCommand,
    /// Any type this endpoint does not handle.
    Unknown(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            other => Self::Unknown(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Unknown(other) => other,
        }
    }
}

/// A single inbound event from the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction type.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// Command payload, present for command invocations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CommandData>,
}

/// Command invocation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandData {
    /// Command name.
    pub name: String,
    /// Ordered command arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

/// A single named command argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name.
    pub name: String,
    /// Option value. Commands here only take string arguments; anything
    /// else fails deserialization and surfaces as a malformed request.
    pub value: String,
}

/// Outbound response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum ResponseType {
    /// Acknowledgment of a liveness check.
    Pong,
    /// Immediate message in the invoking channel.
    ChannelMessageWithSource,
}

impl From<ResponseType> for u8 {
    fn from(value: ResponseType) -> Self {
        match value {
            ResponseType::Pong => 1,
            ResponseType::ChannelMessageWithSource => 4,
        }
    }
}

bitflags! {
    /// Response visibility flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResponseFlags: u64 {
        /// Only the invoking user sees the message.
        const EPHEMERAL = 1 << 6;
    }
}

impl Serialize for ResponseFlags {
    /// The wire format is the raw bitmask, not flag names.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

/// Synchronous response returned to the platform.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    /// Response type.
    #[serde(rename = "type")]
    pub kind: ResponseType,
    /// Message payload; omitted for pong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

/// Message payload of a response.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseData {
    /// Message text.
    pub content: String,
    /// Visibility flags; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<ResponseFlags>,
}

impl InteractionResponse {
    /// Acknowledge a liveness check. Carries no payload.
    #[must_use]
    pub const fn pong() -> Self {
        Self {
            kind: ResponseType::Pong,
            data: None,
        }
    }

    /// A channel message visible to everyone.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::ChannelMessageWithSource,
            data: Some(ResponseData {
                content: content.into(),
                flags: None,
            }),
        }
    }

    /// A channel message visible only to the invoking user.
    pub fn ephemeral_message(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::ChannelMessageWithSource,
            data: Some(ResponseData {
                content: content.into(),
                flags: Some(ResponseFlags::EPHEMERAL),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn interaction_type_tags() {
        assert_eq!(InteractionType::from(1), InteractionType::Ping);
        assert_eq!(InteractionType::from(2), InteractionType::ApplicationCommand);
        assert_eq!(InteractionType::from(99), InteractionType::Unknown(99));
        assert_eq!(u8::from(InteractionType::Unknown(7)), 7);
    }

    #[test]
    fn unknown_type_deserializes() {
        let interaction: Interaction = serde_json::from_value(json!({"type": 3})).unwrap();
        assert_eq!(interaction.kind, InteractionType::Unknown(3));
        assert!(interaction.data.is_none());
    }

    #[test]
    fn missing_type_is_rejected() {
        let result: Result<Interaction, _> = serde_json::from_value(json!({"data": {"name": "hi"}}));
        assert!(result.is_err());
    }

    #[test]
    fn pong_serializes_without_data() {
        let value = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(value, json!({"type": 1}));
    }

    #[test]
    fn message_serializes_without_flags() {
        let value = serde_json::to_value(InteractionResponse::message("Hello world")).unwrap();
        assert_eq!(value, json!({"type": 4, "data": {"content": "Hello world"}}));
    }

    #[test]
    fn ephemeral_flag_serializes_as_integer() {
        let value = serde_json::to_value(InteractionResponse::ephemeral_message("hi")).unwrap();
        assert_eq!(value["data"]["flags"], json!(64));
    }

    #[test]
    fn ephemeral_bit_value() {
        assert_eq!(ResponseFlags::EPHEMERAL.bits(), 64);
    }
}
