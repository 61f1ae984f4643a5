//! Store owning the conversation collection and message logs.

use tracing::debug;

use crate::entities::{Conversation, Message};
use crate::types::{MessagingError, MessagingResult};

/// Owns the ordered conversation collection. Conversations keep their
/// creation order; message logs are append-only and appends to one
/// conversation never touch another. The `&mut self` write surface keeps
/// each append atomic per conversation.
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
}

impl ConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            conversations: Vec::new(),
        }
    }

    /// Create a store over existing conversations, preserving their order
    pub fn with_conversations(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    /// All conversations, in creation order
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Look up a conversation by ID
    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// The first conversation in store order, if any
    pub fn first(&self) -> Option<&Conversation> {
        self.conversations.first()
    }

    /// Number of conversations
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Whether the store holds no conversations
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Append a freshly composed message to a conversation.
    ///
    /// Returns `Ok(None)` without touching any state when the text trims
    /// to empty; callers are expected to pre-validate, but an empty
    /// message is never appended. Fails only when the conversation does
    /// not exist. Sender identity is taken as given; membership checks
    /// belong to the send pipeline.
    pub fn append_message(
        &mut self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> MessagingResult<Option<Message>> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| MessagingError::conversation_not_found(conversation_id))?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let message = Message::new(sender_id, trimmed);
        debug!(conversation_id, message_id = %message.id, "message appended");
        conversation.push_message(message.clone());
        Ok(Some(message))
    }
}
