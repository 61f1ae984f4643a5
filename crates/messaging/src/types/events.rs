//! Event types for session observers.

use serde::{Deserialize, Serialize};

use crate::entities::Message;
use crate::types::{ConversationId, PostId, UserId};

/// Notifications published by the chat session after state changes.
///
/// An event is published only after the mutation it describes is visible
/// through the store's query surface. An observer reacting to
/// `MessageAppended`, typically by scrolling the newest message into
/// view, always finds the appended message in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// A message was committed to a conversation
    MessageAppended {
        conversation_id: ConversationId,
        message: Message,
    },

    /// The active conversation changed
    ConversationSelected { conversation_id: ConversationId },

    /// The current user registered interest in a post for the first time.
    /// Delivered fire-and-forget to analytics/recommendation observers.
    InterestRegistered { post_id: PostId, user_id: UserId },
}

impl SessionEvent {
    /// Get the conversation ID associated with this event
    pub fn conversation_id(&self) -> Option<&str> {
        match self {
            SessionEvent::MessageAppended {
                conversation_id, ..
            }
            | SessionEvent::ConversationSelected { conversation_id } => Some(conversation_id),
            SessionEvent::InterestRegistered { .. } => None,
        }
    }

    /// Get event type name for logging
    pub fn event_type_name(&self) -> &'static str {
        match self {
            SessionEvent::MessageAppended { .. } => "message_appended",
            SessionEvent::ConversationSelected { .. } => "conversation_selected",
            SessionEvent::InterestRegistered { .. } => "interest_registered",
        }
    }
}
