//! Thumbnail download into the staging cache.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::{Attachment, CacheOrigin};
use crate::domain::errors::DownloadError;
use crate::domain::ports::{RemoteImagePort, StagingPort};

/// Fetches remote thumbnails and stages them as attachable streams.
#[derive(Clone)]
pub struct ImageDownloader {
    fetcher: Arc<dyn RemoteImagePort>,
    staging: Arc<dyn StagingPort>,
}

impl ImageDownloader {
    /// Creates a downloader.
    #[must_use]
    pub fn new(fetcher: Arc<dyn RemoteImagePort>, staging: Arc<dyn StagingPort>) -> Self {
        Self { fetcher, staging }
    }

    /// Downloads `url`, stages it under a random `.jpg` name and opens it.
    ///
    /// On success the caller owns the staged file and must remove it; on
    /// failure nothing is left staged.
    ///
    /// # Errors
    /// Returns error if the download, write or open fails.
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<Attachment, DownloadError> {
        let bytes = self.fetcher.fetch(url).await?;
        let name = format!("{}.jpg", Uuid::new_v4().simple());

        let file = self.staging.stage(&bytes, &name, CacheOrigin::Lens).await?;

        match self.staging.open_for_send(&file.path).await {
            Ok(attachment) => {
                debug!(url = %url, path = %file.path.display(), "Thumbnail staged");
                Ok(attachment)
            }
            Err(e) => {
                if let Err(remove_error) = self.staging.remove(&file.path).await {
                    warn!(error = %remove_error, "Failed to discard unopened thumbnail");
                }
                Err(e.into())
            }
        }
    }
}
