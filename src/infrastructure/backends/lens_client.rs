//! Reverse image search client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::LensResponse;
use crate::domain::entities::{LensResult, MAX_LENS_RESULTS};
use crate::domain::errors::LensError;
use crate::domain::ports::LensPort;

/// Public Google Lens proxy endpoint.
pub const DEFAULT_LENS_URL: &str = "https://deku-rest-apis.ooguy.com/api/glens";

/// Looks images up through a Google Lens proxy.
#[derive(Debug, Clone)]
pub struct GlensClient {
    client: Client,
    endpoint: String,
    max_results: usize,
}

impl GlensClient {
    /// Creates client with the public endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DEFAULT_LENS_URL)
    }

    /// Creates client with a custom endpoint.
    #[must_use]
    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            max_results: MAX_LENS_RESULTS,
        }
    }

    /// Sets how many results are kept, never more than [`MAX_LENS_RESULTS`].
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.clamp(1, MAX_LENS_RESULTS);
        self
    }
}

#[async_trait]
impl LensPort for GlensClient {
    async fn lookup(&self, image_url: &str) -> Result<Vec<LensResult>, LensError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", image_url)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach lens backend");
                LensError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LensError::Status {
                status: status.as_u16(),
            });
        }

        let body: LensResponse = response
            .json()
            .await
            .map_err(|e| LensError::malformed(e.to_string()))?;

        if !body.status {
            return Err(LensError::Rejected);
        }
        if body.data.is_empty() {
            return Err(LensError::NoResults);
        }

        let total = body.data.len();
        let results: Vec<LensResult> = body
            .data
            .into_iter()
            .take(self.max_results)
            .map(|item| LensResult::new(item.title, item.source, item.link, item.thumbnail))
            .collect();

        debug!(total, kept = results.len(), "Lens lookup complete");

        Ok(results)
    }
}
