//! Chat host delivery errors.

use thiserror::Error;

/// Failures reported by the chat host when sending, replying or reacting.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum MessageError {
    #[error("failed to deliver message: {message}")]
    Delivery { message: String },

    #[error("failed to read attachment {name}: {message}")]
    Attachment { name: String, message: String },
}

impl MessageError {
    /// Creates delivery error.
    #[must_use]
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }
}
