use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Message;
use crate::types::{ConversationId, UserId};

/// Represents a fixed two-party message thread.
///
/// The participant pair is immutable after creation and the message log is
/// append-only; both fields are private so the only write path is the
/// store's append surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation ID
    pub id: ConversationId,
    /// The two participants, in display order
    participants: [UserId; 2],
    /// Append-only message log, oldest first
    messages: Vec<Message>,
    /// Creation timestamp
    pub created_at: String,
}

impl Conversation {
    /// Create an empty conversation between two users
    pub fn new(first: impl Into<UserId>, second: impl Into<UserId>) -> Self {
        Self::with_history(Uuid::new_v4().to_string(), [first.into(), second.into()], Vec::new())
    }

    /// Rehydrate a conversation with an existing message log, e.g. the
    /// session's seed data. The log is treated as already append-ordered.
    pub fn with_history(
        id: impl Into<ConversationId>,
        participants: [UserId; 2],
        messages: Vec<Message>,
    ) -> Self {
        Self {
            id: id.into(),
            participants,
            messages,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// The participant pair, in display order
    pub fn participants(&self) -> &[UserId; 2] {
        &self.participants
    }

    /// The message log, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the log
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// The newest message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Check whether the given user is one of the two participants
    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|id| id == user_id)
    }

    /// The participant who is not the given user
    pub fn other_participant(&self, user_id: &str) -> Option<&UserId> {
        self.participants.iter().find(|id| *id != user_id)
    }

    /// Check whether this conversation is between the given pair,
    /// regardless of display order
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        let [first, second] = &self.participants;
        (first == a && second == b) || (first == b && second == a)
    }

    /// Append a message to the tail of the log. Crate-private: all appends
    /// go through the conversation store.
    pub(crate) fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Validate conversation data
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Conversation ID cannot be empty".to_string());
        }

        let [first, second] = &self.participants;
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err("Participant IDs cannot be empty".to_string());
        }

        if first == second {
            return Err("Participants must be two distinct users".to_string());
        }

        for message in &self.messages {
            if !self.is_participant(&message.sender_id) {
                return Err(format!(
                    "Message {} was sent by a non-participant",
                    message.id
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_creation() {
        let conversation = Conversation::new("u1", "u3");

        assert!(!conversation.id.is_empty());
        assert_eq!(conversation.message_count(), 0);
        assert!(conversation.last_message().is_none());
        assert!(conversation.is_participant("u1"));
        assert!(conversation.is_participant("u3"));
        assert!(!conversation.is_participant("u2"));
    }

    #[test]
    fn test_pair_equality_ignores_display_order() {
        let conversation = Conversation::new("u1", "u3");

        assert!(conversation.involves_pair("u1", "u3"));
        assert!(conversation.involves_pair("u3", "u1"));
        assert!(!conversation.involves_pair("u1", "u2"));
        assert!(!conversation.involves_pair("u1", "u1"));
    }

    #[test]
    fn test_other_participant() {
        let conversation = Conversation::new("u1", "u3");

        assert_eq!(conversation.other_participant("u1").map(String::as_str), Some("u3"));
        assert_eq!(conversation.other_participant("u3").map(String::as_str), Some("u1"));
        // a non-participant just gets the first of the pair
        assert_eq!(conversation.other_participant("u9").map(String::as_str), Some("u1"));
    }

    #[test]
    fn test_messages_keep_append_order() {
        let mut conversation = Conversation::new("u1", "u3");
        conversation.push_message(Message::new("u1", "first"));
        conversation.push_message(Message::new("u3", "second"));
        conversation.push_message(Message::new("u1", "third"));

        let texts: Vec<&str> = conversation.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(conversation.last_message().map(|m| m.text.as_str()), Some("third"));
    }

    #[test]
    fn test_conversation_validation() {
        let valid = Conversation::new("u1", "u3");
        assert!(valid.validate().is_ok());

        let same_user = Conversation::new("u1", "u1");
        assert!(same_user.validate().is_err());

        let empty_id = Conversation::with_history("", ["u1".to_string(), "u3".to_string()], Vec::new());
        assert!(empty_id.validate().is_err());

        let foreign_sender = Conversation::with_history(
            "c9",
            ["u1".to_string(), "u3".to_string()],
            vec![Message::new("u7", "hello")],
        );
        assert!(foreign_sender.validate().is_err());
    }
}
