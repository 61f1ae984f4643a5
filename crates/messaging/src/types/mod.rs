//! Shared types for the messaging crate.

pub mod errors;
pub mod events;

pub use errors::{MessagingError, MessagingResult};
pub use events::SessionEvent;

// Identity aliases shared with the registry crate
pub use knot_registry::{PostId, UserId};

// Common type aliases
pub type ConversationId = String;
pub type MessageId = String;
