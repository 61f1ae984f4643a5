//! Error types for the messaging core.

use thiserror::Error;

/// Result type alias for messaging operations
pub type MessagingResult<T> = Result<T, MessagingError>;

/// Main error type for the messaging core. Every variant is recoverable;
/// the worst outcome anywhere in this crate is a no-op.
#[derive(Debug, Error, PartialEq)]
pub enum MessagingError {
    #[error("Conversation not found: {id}")]
    ConversationNotFound { id: String },

    #[error("Draft is empty")]
    EmptyDraft,

    #[error("No active conversation selected")]
    NoActiveConversation,
}

impl MessagingError {
    /// Create a not found error for conversations
    pub fn conversation_not_found(id: impl Into<String>) -> Self {
        Self::ConversationNotFound { id: id.into() }
    }
}
