use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{PostId, UserId};

/// Represents a shared resource listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID
    pub id: PostId,
    /// Author user ID; resolve through the registry
    pub author_id: UserId,
    /// Listing title
    pub title: String,
    /// Listing description
    pub description: String,
    /// Category tag
    pub category: String,
    /// Optional image reference
    pub image_url: Option<String>,
    /// Availability state; set outside this core, read-only here
    pub status: PostStatus,
    /// Users who registered interest in this post
    pub interested_user_ids: Vec<UserId>,
    /// Display timestamp
    pub timestamp: String,
}

/// Post availability enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Available,
    Completed,
    Unavailable,
}

impl From<&str> for PostStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "completed" => PostStatus::Completed,
            "unavailable" => PostStatus::Unavailable,
            _ => PostStatus::Available,
        }
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Available => "available".to_string(),
            PostStatus::Completed => "completed".to_string(),
            PostStatus::Unavailable => "unavailable".to_string(),
        }
    }
}

impl Post {
    /// Create a new available post instance
    pub fn new(
        author_id: impl Into<UserId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            image_url: None,
            status: PostStatus::Available,
            interested_user_ids: Vec::new(),
            timestamp: "Just now".to_string(),
        }
    }

    /// Check if the post is open for interest
    pub fn is_available(&self) -> bool {
        matches!(self.status, PostStatus::Available)
    }

    /// Number of users who registered interest
    pub fn interested_count(&self) -> usize {
        self.interested_user_ids.len()
    }

    /// Add a user to the interested set. Returns whether the set changed;
    /// re-adding an already interested user is a no-op.
    pub(crate) fn add_interested_user(&mut self, user_id: &str) -> bool {
        if self.interested_user_ids.iter().any(|id| id == user_id) {
            return false;
        }
        self.interested_user_ids.push(user_id.to_string());
        true
    }

    /// Validate post data
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Post title cannot be empty".to_string());
        }

        if self.title.len() > 255 {
            return Err("Post title too long (max 255 characters)".to_string());
        }

        if self.category.trim().is_empty() {
            return Err("Post category cannot be empty".to_string());
        }

        if self.description.len() > 10_000 {
            return Err("Post description too long (max 10,000 characters)".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_creation() {
        let post = Post::new("u2", "Biology flashcard deck", "400 cards, ring-bound.", "Class Notes");

        assert_eq!(post.author_id, "u2");
        assert_eq!(post.status, PostStatus::Available);
        assert!(post.is_available());
        assert_eq!(post.interested_count(), 0);
        assert!(!post.id.is_empty());
    }

    #[test]
    fn test_post_status_conversion() {
        assert_eq!(PostStatus::from("available"), PostStatus::Available);
        assert_eq!(PostStatus::from("completed"), PostStatus::Completed);
        assert_eq!(PostStatus::from("unavailable"), PostStatus::Unavailable);
        assert_eq!(PostStatus::from("unknown"), PostStatus::Available);

        assert_eq!(String::from(PostStatus::Available), "available");
        assert_eq!(String::from(PostStatus::Completed), "completed");
        assert_eq!(String::from(PostStatus::Unavailable), "unavailable");
    }

    #[test]
    fn test_interested_set_is_deduplicated() {
        let mut post = Post::new("u2", "Graphing calculator", "TI-84, works fine.", "Lab Equipment");

        assert!(post.add_interested_user("u5"));
        assert!(!post.add_interested_user("u5"));
        assert!(post.add_interested_user("u6"));
        assert_eq!(post.interested_count(), 2);
    }

    #[test]
    fn test_post_validation() {
        let mut post = Post::new("u2", "Valid title", "Valid description", "Textbooks");
        assert!(post.validate().is_ok());

        post.title = "   ".to_string();
        assert!(post.validate().is_err());

        post.title = "a".repeat(256);
        assert!(post.validate().is_err());

        post.title = "Valid title".to_string();
        post.category = "".to_string();
        assert!(post.validate().is_err());
    }
}
