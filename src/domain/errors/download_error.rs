//! Thumbnail download error types.

use thiserror::Error;

use crate::domain::ports::CacheError;

/// Thumbnail download failures.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum DownloadError {
    #[error("failed to download {url}: {message}")]
    Network { url: String, message: String },

    #[error("failed to download {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to stage download: {0}")]
    Cache(#[from] CacheError),
}

impl DownloadError {
    /// Creates network error.
    #[must_use]
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }
}
