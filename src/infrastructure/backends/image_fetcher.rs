//! Remote image download.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{trace, warn};

use crate::domain::errors::DownloadError;
use crate::domain::ports::RemoteImagePort;

/// Downloads remote images with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteImagePort for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, DownloadError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Image download failed");
            DownloadError::network(url, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::network(url, e.to_string()))?;

        trace!(url = %url, size = bytes.len(), "Downloaded image");

        Ok(bytes)
    }
}
