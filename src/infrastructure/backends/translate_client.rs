//! Google Translate (gtx) client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::errors::TranslationError;
use crate::domain::ports::TranslationPort;

/// Public gtx endpoint.
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Translates text to English through the gtx endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
}

impl GoogleTranslateClient {
    /// Creates client with the public endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DEFAULT_TRANSLATE_URL)
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

/// Extracts `body[0][0][0]`, the first translated segment.
fn first_segment(body: &Value) -> Option<&str> {
    body.get(0)?.get(0)?.get(0)?.as_str()
}

#[async_trait]
impl TranslationPort for GoogleTranslateClient {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", "en"),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Translation request failed");
                TranslationError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Translation service returned error status");
            return Err(TranslationError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse translation response");
            TranslationError::malformed(e.to_string())
        })?;

        let translated = first_segment(&body)
            .ok_or_else(|| TranslationError::malformed("missing translated segment"))?;

        debug!(source = %text, translated = %translated, "Translated prompt");

        Ok(translated.to_string())
    }
}
