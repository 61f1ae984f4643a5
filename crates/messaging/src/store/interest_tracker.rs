//! Dedup bookkeeping for the current user's post interest.

use std::collections::HashSet;

use tracing::debug;

use crate::types::PostId;

/// Tracks which posts the current user has registered interest in. The
/// set only ever grows within a session; registering the same post twice
/// is a no-op, never an error.
#[derive(Debug, Default)]
pub struct InterestTracker {
    registered: HashSet<PostId>,
}

impl InterestTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            registered: HashSet::new(),
        }
    }

    /// Register interest in a post. Returns whether this call changed
    /// state. Unknown post IDs are recorded as-is; post existence is the
    /// registry's concern, which keeps this operation total.
    pub fn register(&mut self, post_id: impl Into<PostId>) -> bool {
        let post_id = post_id.into();
        let inserted = self.registered.insert(post_id.clone());
        if inserted {
            debug!(%post_id, "interest registered");
        }
        inserted
    }

    /// Check whether a post has been registered
    pub fn is_interested(&self, post_id: &str) -> bool {
        self.registered.contains(post_id)
    }

    /// Number of registered posts
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration_changes_state() {
        let mut tracker = InterestTracker::new();

        assert!(!tracker.is_interested("p2"));
        assert!(tracker.register("p2"));
        assert!(tracker.is_interested("p2"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_second_registration_is_a_no_op() {
        let mut tracker = InterestTracker::new();

        assert!(tracker.register("p2"));
        assert!(!tracker.register("p2"));
        assert!(tracker.is_interested("p2"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_unknown_ids_are_still_recorded() {
        let mut tracker = InterestTracker::new();

        assert!(tracker.register("not-a-real-post"));
        assert!(tracker.is_interested("not-a-real-post"));
    }

    #[test]
    fn test_set_only_grows() {
        let mut tracker = InterestTracker::new();
        tracker.register("p1");
        tracker.register("p2");
        tracker.register("p1");

        assert_eq!(tracker.len(), 2);
        assert!(!tracker.is_empty());
    }
}
