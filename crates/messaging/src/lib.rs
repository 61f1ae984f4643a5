//! # Knot Messaging Crate
//!
//! This crate provides the conversation and messaging state engine for the
//! Knot client. It contains the domain entities for conversations and
//! messages, the in-memory store that owns them, the focus/selection state
//! machine, the send pipeline, the placeholder suggestion engine, and the
//! interest tracker.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (Conversation, Message)
//! - **Store**: In-memory single-writer state (ConversationStore, InterestTracker)
//! - **Services**: Selection, composing, placeholder rotation, and the
//!   session host that wires everything together
//! - **Types**: Shared types, errors, and session events
//!
//! All mutations are synchronous and run to completion; the only background
//! activity is the placeholder rotation task, which is cancelled on every
//! mode switch and when its engine is dropped.

pub mod entities;
pub mod services;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use entities::{Conversation, Message};
pub use services::{
    ChatSession, ConversationSelector, GreetingPicker, MessageComposer, PlaceholderEngine,
    RandomPicker, SelectionState,
};
pub use store::{ConversationStore, InterestTracker};
pub use types::{
    ConversationId, MessageId, MessagingError, MessagingResult, PostId, SessionEvent, UserId,
};
