use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A resource listing being composed in the share form. Drafts live
/// outside the registry until the form is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    /// Listing title
    pub title: String,
    /// Listing description; transcription output is appended here
    pub description: String,
    /// Category tag
    pub category: String,
    /// Optional image reference
    pub image_url: Option<String>,
    /// When the draft was started
    pub created_at: String,
}

impl PostDraft {
    /// Create an empty draft in the given category
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: category.into(),
            image_url: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Append transcribed text to the description. An empty description is
    /// replaced outright; otherwise the text lands under a separator block.
    pub fn apply_transcription(&mut self, text: &str) {
        if self.description.trim().is_empty() {
            self.description = text.to_string();
        } else {
            self.description = format!(
                "{}\n\n--- Transcribed Text ---\n{}",
                self.description, text
            );
        }
    }

    /// Validate draft data before submission
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Draft title cannot be empty".to_string());
        }

        if self.category.trim().is_empty() {
            return Err("Draft category cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcription_replaces_empty_description() {
        let mut draft = PostDraft::new("Class Notes");
        draft.apply_transcription("Chapter 4: cell division");

        assert_eq!(draft.description, "Chapter 4: cell division");
    }

    #[test]
    fn test_transcription_appends_under_separator() {
        let mut draft = PostDraft::new("Class Notes");
        draft.description = "Handwritten notes, two chapters.".to_string();
        draft.apply_transcription("Chapter 4: cell division");

        assert!(draft.description.starts_with("Handwritten notes, two chapters."));
        assert!(draft.description.contains("--- Transcribed Text ---"));
        assert!(draft.description.ends_with("Chapter 4: cell division"));
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = PostDraft::new("Class Notes");
        assert!(draft.validate().is_err());

        draft.title = "Algebra cheat sheet".to_string();
        assert!(draft.validate().is_ok());

        draft.category = " ".to_string();
        assert!(draft.validate().is_err());
    }
}
