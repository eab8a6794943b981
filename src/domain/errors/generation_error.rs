//! Image generation error types.

use thiserror::Error;

/// Image generation backend failures.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum GenerationError {
    /// The backend answered with an `error` field.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("{message}")]
    Network { message: String },

    #[error("invalid image payload: {reason}")]
    MalformedResponse { reason: String },
}

impl GenerationError {
    /// Creates backend-reported error.
    #[must_use]
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

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

    /// Returns the message the backend reported, if it sent one.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message, .. } => Some(message),
            _ => None,
        }
    }
}
