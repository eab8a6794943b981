//! Translation port definition.

use async_trait::async_trait;

use crate::domain::errors::TranslationError;

/// Port for translating free text into English.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Returns the English rendering of `text`, source language auto-detected.
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}
