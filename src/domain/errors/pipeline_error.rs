//! Errors surfaced to the pipeline orchestrators.

use thiserror::Error;

use super::{DownloadError, GenerationError, LensError, MessageError, TranslationError};
use crate::domain::ports::CacheError;

/// Any failure inside one pipeline invocation.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// The user gave no prompt.
    #[error("no prompt supplied")]
    MissingPrompt,

    /// Translation failed.
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// Image generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Reverse image search failed.
    #[error(transparent)]
    Lens(#[from] LensError),

    /// Thumbnail download failed.
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Local staging failed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The chat host rejected a message.
    #[error(transparent)]
    Message(#[from] MessageError),
}

impl PipelineError {
    /// Most specific human-readable text for this failure.
    ///
    /// Prefers the message a backend reported over transport details.
    #[must_use]
    pub fn user_detail(&self) -> String {
        match self {
            Self::Generation(e) => e
                .backend_message()
                .map_or_else(|| e.to_string(), str::to_owned),
            other => other.to_string(),
        }
    }

    /// Returns whether running the attempt again may succeed.
    ///
    /// A rejected staging name fails the same way every time.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Self::MissingPrompt | Self::Message(_) | Self::Cache(CacheError::InvalidName(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_detail_prefers_backend_message() {
        let error = PipelineError::from(GenerationError::backend(500, "NSFW prompt rejected"));
        assert_eq!(error.user_detail(), "NSFW prompt rejected");

        let error = PipelineError::from(GenerationError::Status { status: 502 });
        assert_eq!(error.user_detail(), "Request failed with status code 502");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(!PipelineError::MissingPrompt.is_retryable());
        assert!(!PipelineError::from(MessageError::delivery("gone")).is_retryable());
        assert!(PipelineError::from(TranslationError::network("timeout")).is_retryable());
        assert!(PipelineError::from(LensError::NoResults).is_retryable());
        assert!(!PipelineError::from(CacheError::InvalidName("../x".into())).is_retryable());
        assert!(
            PipelineError::from(CacheError::Write {
                path: "cache_0.png".into(),
                message: "disk full".into(),
            })
            .is_retryable()
        );
    }
}
