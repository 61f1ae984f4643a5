use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{MessageId, UserId};

/// Display timestamp assigned to freshly composed messages
pub const JUST_NOW: &str = "Just now";

/// Represents a single message within a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Globally unique message ID
    pub id: MessageId,
    /// User ID of the sender
    pub sender_id: UserId,
    /// Message body, trimmed of surrounding whitespace
    pub text: String,
    /// Display timestamp ("Just now" for freshly composed messages)
    pub timestamp: String,
}

impl Message {
    /// Create a freshly composed message. The text is trimmed and the ID
    /// is a random UUID, so rapid successive sends can never collide.
    pub fn new(sender_id: impl Into<UserId>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_id: sender_id.into(),
            text: text.into().trim().to_string(),
            timestamp: JUST_NOW.to_string(),
        }
    }

    /// Check whether this message was sent by the given user
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }

    /// Validate message data
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("Message text cannot be empty".to_string());
        }

        if self.text.len() > 10_000 {
            return Err("Message text too long (max 10,000 characters)".to_string());
        }

        Ok(())
    }
}
