//! Services for the messaging core.
//!
//! This layer holds the focus/selection state machine, the send pipeline,
//! the placeholder suggestion engine, and the session host that wires the
//! stores and services into one application context.

pub mod composer;
pub mod placeholder;
pub mod selector;
pub mod session;

// Re-export all services
pub use composer::MessageComposer;
pub use placeholder::{GreetingPicker, PlaceholderEngine, RandomPicker};
pub use selector::{ConversationSelector, SelectionState};
pub use session::ChatSession;
