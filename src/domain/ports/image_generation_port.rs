//! Image generation port definition.

use async_trait::async_trait;

use crate::domain::entities::GeneratedImage;
use crate::domain::errors::GenerationError;

/// Port for text-to-image backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerationPort: Send + Sync {
    /// Generates images for `prompt`, in the order the backend returns them.
    async fn generate(&self, prompt: &str) -> Result<Vec<GeneratedImage>, GenerationError>;
}
