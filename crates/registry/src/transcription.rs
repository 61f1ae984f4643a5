//! Boundary to the external image-to-text collaborator.
//!
//! The collaborator itself lives outside this crate; callers supply an
//! implementation and the helper below feeds its output into a draft.
//! A failing collaborator surfaces a user-visible error and leaves the
//! draft untouched.

use std::future::Future;

use thiserror::Error;

use crate::entities::PostDraft;

/// Error surfaced to the user when transcription fails
#[derive(Debug, Error, PartialEq)]
pub enum TranscribeError {
    #[error("Unsupported image format: {mime}")]
    UnsupportedFormat { mime: String },

    #[error("Transcription failed: {reason}")]
    Failed { reason: String },
}

impl TranscribeError {
    /// Create a failure with a user-visible reason
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

/// External service turning an image into text
pub trait Transcriber {
    fn transcribe(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> impl Future<Output = Result<String, TranscribeError>> + Send;
}

/// Run the collaborator and append its output to the draft description.
/// On failure the draft is left exactly as it was.
pub async fn attach_transcription<T: Transcriber>(
    draft: &mut PostDraft,
    transcriber: &T,
    image: &[u8],
    mime_type: &str,
) -> Result<(), TranscribeError> {
    let text = transcriber.transcribe(image, mime_type).await?;
    draft.apply_transcription(&text);
    Ok(())
}
