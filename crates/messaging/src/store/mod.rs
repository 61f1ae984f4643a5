//! In-memory state owned by the messaging core.
//!
//! This layer is the single writer for conversation, message, and interest
//! state. All read access from other components goes through its query
//! surface.

pub mod conversation_store;
pub mod interest_tracker;

// Re-export all stores
pub use conversation_store::ConversationStore;
pub use interest_tracker::InterestTracker;
