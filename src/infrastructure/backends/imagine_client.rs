//! Text-to-image backend client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::domain::entities::GeneratedImage;
use crate::domain::errors::GenerationError;
use crate::domain::ports::ImageGenerationPort;

/// Public generation endpoint.
pub const DEFAULT_GENERATE_URL: &str = "https://imagine-ayoub.vercel.app/generate-image";

/// Posts prompts to the generation backend.
#[derive(Debug, Clone)]
pub struct ImagineClient {
    client: Client,
    endpoint: String,
}

impl ImagineClient {
    /// Creates client with the public endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DEFAULT_GENERATE_URL)
    }

    /// Creates client with a custom endpoint.
    #[must_use]
    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Decodes a binary string where each char carries one byte (latin1).
fn decode_binary_string(data: &str) -> Option<Vec<u8>> {
    data.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}

#[async_trait]
impl ImageGenerationPort for ImagineClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<GeneratedImage>, GenerationError> {
        debug!(prompt = %prompt, "Requesting image generation");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach generation backend");
                GenerationError::network(e.to_string())
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read generation response");
            GenerationError::network(e.to_string())
        })?;

        if let Ok(error) = serde_json::from_str::<ErrorResponse>(&raw) {
            warn!(status = %status, body = %raw, "Generation backend reported error");
            return Err(GenerationError::backend(status.as_u16(), error.error));
        }

        if !status.is_success() {
            warn!(status = %status, body = %raw, "Generation backend returned error");
            return Err(GenerationError::Status {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = serde_json::from_str(&raw).map_err(|e| {
            warn!(error = %e, body = %raw, "Failed to parse generation response");
            GenerationError::malformed(e.to_string())
        })?;

        let images = body
            .images
            .iter()
            .enumerate()
            .map(|(index, data)| {
                decode_binary_string(data)
                    .map(|bytes| GeneratedImage::new(index, bytes))
                    .ok_or_else(|| {
                        GenerationError::malformed(format!("image {index} is not binary data"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = images.len(), "Generation backend returned images");

        Ok(images)
    }
}
