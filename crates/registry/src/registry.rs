//! In-session owner of user and post reference data.

use tracing::debug;

use crate::entities::{Post, User};
use crate::types::{RegistryError, RegistryResult};

/// Owns all User and Post entities for the session. Other components hold
/// IDs and resolve them through the query surface here; nothing outside
/// this type mutates a user or post.
#[derive(Debug, Default)]
pub struct Registry {
    users: Vec<User>,
    posts: Vec<Post>,
}

impl Registry {
    /// Create a registry over the given reference data
    pub fn new(users: Vec<User>, posts: Vec<Post>) -> Self {
        Self { users, posts }
    }

    /// All users, in registration order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All posts, in feed order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a user by ID
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Look up a post by ID
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Posts authored by the given user, in feed order
    pub fn posts_by_author(&self, author_id: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.author_id == author_id)
            .collect()
    }

    /// Declare a user's offer categories. Allowed exactly once; the offer
    /// list is immutable afterwards.
    pub fn complete_onboarding(
        &mut self,
        user_id: &str,
        offers: Vec<String>,
    ) -> RegistryResult<()> {
        if offers.is_empty() {
            return Err(RegistryError::validation(
                "at least one offer category is required",
            ));
        }

        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| RegistryError::user_not_found(user_id))?;

        if user.onboarded {
            return Err(RegistryError::AlreadyOnboarded {
                id: user_id.to_string(),
            });
        }

        user.offers = offers;
        user.onboarded = true;
        debug!(user_id, offers = user.offers.len(), "onboarding complete");
        Ok(())
    }

    /// Add a user to a post's interested set. Idempotent; an unknown post
    /// is a silent no-op so interest bookkeeping stays total.
    pub fn mark_interested(&mut self, post_id: &str, user_id: &str) -> bool {
        match self.posts.iter_mut().find(|post| post.id == post_id) {
            Some(post) => {
                let changed = post.add_interested_user(user_id);
                if changed {
                    debug!(post_id, user_id, "post interest recorded");
                }
                changed
            }
            None => {
                debug!(post_id, "interest for unknown post ignored");
                false
            }
        }
    }
}
