//! Translation error types.

use thiserror::Error;

/// Translation backend failures.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum TranslationError {
    #[error("Error translating text: {message}")]
    Network { message: String },

    #[error("Error translating text: service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Error translating text: {reason}")]
    MalformedResponse { reason: String },
}

impl TranslationError {
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
