//! Reverse image search port definition.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::LensResult;
use crate::domain::errors::{DownloadError, LensError};

/// Port for reverse image search backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LensPort: Send + Sync {
    /// Looks up `image_url`. Returns a non-empty, capped list in backend order.
    async fn lookup(&self, image_url: &str) -> Result<Vec<LensResult>, LensError>;
}

/// Port for fetching remote images as raw bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteImagePort: Send + Sync {
    /// Downloads the resource at `url`.
    async fn fetch(&self, url: &str) -> Result<Bytes, DownloadError>;
}
