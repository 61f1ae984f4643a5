//! Error types for the registry.

use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Main error type for the registry
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("User not found: {id}")]
    UserNotFound { id: String },

    #[error("Offers already declared for user: {id}")]
    AlreadyOnboarded { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl RegistryError {
    /// Create a not found error for users
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
