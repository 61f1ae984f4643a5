use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Represents a marketplace participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Avatar image reference
    pub avatar_url: String,
    /// School affiliation
    pub school: String,
    /// Number of completed transactions
    pub transaction_count: u32,
    /// Offer categories declared at onboarding; empty until then
    pub offers: Vec<String>,
    /// Whether the user has completed onboarding. Offers can only be
    /// declared while this is false.
    #[serde(default)]
    pub onboarded: bool,
}

impl User {
    /// Create a new user instance with no declared offers
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
        school: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
            school: school.into(),
            transaction_count: 0,
            offers: Vec::new(),
            onboarded: false,
        }
    }

    /// Check whether the user has declared any offers
    pub fn has_offers(&self) -> bool {
        !self.offers.is_empty()
    }

    /// Validate user data
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("User ID cannot be empty".to_string());
        }

        if self.name.trim().is_empty() {
            return Err("User name cannot be empty".to_string());
        }

        if self.name.len() > 120 {
            return Err("User name too long (max 120 characters)".to_string());
        }

        Ok(())
    }
}
