use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminator carried in the `type` field of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    System,
}

/// A single chat message as it travels over a room channel.
///
/// Messages are never mutated after construction; the list a tab renders is
/// append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub text: String,
    /// Milliseconds since the Unix epoch, taken from the local clock.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

impl Message {
    pub fn new(kind: MessageKind, sender: impl Into<String>, text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: sender.into(),
            text: text.trim().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            kind,
        }
    }

    pub fn text(sender: impl Into<String>, text: &str) -> Self {
        Self::new(MessageKind::Text, sender, text)
    }

    pub fn system(sender: impl Into<String>, text: &str) -> Self {
        Self::new(MessageKind::System, sender, text)
    }

    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }
}

/// Room code and display name for one chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    pub room_code: String,
    pub user_name: String,
}

impl ChatSession {
    pub fn new(room_code: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            room_code: room_code.into(),
            user_name: user_name.into(),
        }
    }
}
