//! Reverse image search error types.

use thiserror::Error;

/// Reverse image search failures.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum LensError {
    #[error("Failed to fetch data: {message}")]
    Network { message: String },

    #[error("Failed to fetch data: HTTP {status}")]
    Status { status: u16 },

    #[error("search backend reported failure")]
    Rejected,

    #[error("No results found.")]
    NoResults,

    #[error("unexpected search response: {reason}")]
    MalformedResponse { reason: String },
}

impl LensError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates malformed response error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}
