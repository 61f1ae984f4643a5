//! # Knot Registry Crate
//!
//! This crate provides the identity and post reference data for the Knot
//! client. It contains the domain entities for users and posts, the
//! in-session registry that owns them, the offer-category catalog, and the
//! post drafting flow with its transcription collaborator seam.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (User, Post, PostDraft)
//! - **Registry**: In-session owner of all user and post data
//! - **Transcription**: Boundary to the external image-to-text collaborator
//! - **Types**: Shared types and error definitions

pub mod catalog;
pub mod entities;
pub mod registry;
pub mod transcription;
pub mod types;

// Re-export main types for convenience
pub use catalog::OFFER_CATEGORIES;
pub use entities::{Post, PostDraft, PostStatus, User};
pub use registry::Registry;
pub use transcription::{attach_transcription, TranscribeError, Transcriber};
pub use types::{PostId, RegistryError, RegistryResult, UserId};
