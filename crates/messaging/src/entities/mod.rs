//! Domain entities for the messaging core.
//!
//! These are pure domain objects. Message logs are append-only: the only
//! mutation path is `ConversationStore::append_message`, which is why the
//! message sequence is not directly writable from outside this crate.

pub mod conversation;
pub mod message;

// Re-export all entity types
pub use conversation::Conversation;
pub use message::Message;
