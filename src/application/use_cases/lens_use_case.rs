//! Reverse image search pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, error, info, warn};

use crate::application::dto::{DownloadPolicy, LensOptions, LensOutcome, PipelineMessages};
use crate::application::services::{ImageDownloader, PipelineCleanup, ResultFormatter};
use crate::domain::entities::{Attachment, OutgoingMessage, ReplyAttachment};
use crate::domain::errors::{DownloadError, PipelineError};
use crate::domain::ports::{LensPort, MessagePort, RemoteImagePort, StagingPort};

/// Counts reported by a delivered lookup.
struct Delivered {
    results: usize,
    attachments: usize,
}

/// Looks up the replied-to image and answers with matches and thumbnails.
#[derive(Clone)]
pub struct LensUseCase {
    lens: Arc<dyn LensPort>,
    downloader: ImageDownloader,
    cleanup: PipelineCleanup,
    formatter: ResultFormatter,
    options: LensOptions,
    messages: PipelineMessages,
}

impl LensUseCase {
    /// Creates the use case with default options and messages.
    #[must_use]
    pub fn new(
        lens: Arc<dyn LensPort>,
        fetcher: Arc<dyn RemoteImagePort>,
        staging: Arc<dyn StagingPort>,
    ) -> Self {
        let options = LensOptions::default();
        Self {
            lens,
            downloader: ImageDownloader::new(fetcher, staging.clone()),
            cleanup: PipelineCleanup::new(staging),
            formatter: ResultFormatter::new(options.bold_labels),
            options,
            messages: PipelineMessages::default(),
        }
    }

    /// Overrides download and formatting options.
    #[must_use]
    pub fn with_options(mut self, options: LensOptions) -> Self {
        self.formatter = ResultFormatter::new(options.bold_labels);
        self.options = options;
        self
    }

    /// Overrides user-facing strings.
    #[must_use]
    pub fn with_messages(mut self, messages: PipelineMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Runs the pipeline for the message `messenger` wraps.
    ///
    /// Host failures are logged; the outcome always reflects what was
    /// attempted, and staged thumbnails are removed on every path.
    pub async fn execute(&self, messenger: &dyn MessagePort) -> LensOutcome {
        let Some(image_url) = first_image_url(messenger.replied_attachments()) else {
            debug!("Lens invoked without a replied image");
            if let Err(e) = messenger.reply(&self.messages.no_image).await {
                warn!(error = %e, "Failed to send missing image warning");
            }
            return LensOutcome::NoImage;
        };

        let mut staged = Vec::new();
        let result = self.run(&image_url, messenger, &mut staged).await;

        let cleanup = self.cleanup.run(&staged).await;
        if !cleanup.is_clean() {
            warn!(failed = cleanup.failed.len(), "Staged thumbnails left behind");
        }

        match result {
            Ok(delivered) => {
                info!(
                    results = delivered.results,
                    attachments = delivered.attachments,
                    "Lens results delivered"
                );
                LensOutcome::Delivered {
                    results: delivered.results,
                    attachments: delivered.attachments,
                    cleanup,
                }
            }
            Err(e) => {
                error!(image_url = %image_url, error = %e, "Lens lookup failed");
                if let Err(e) = messenger.react(&self.messages.error_reaction).await {
                    warn!(error = %e, "Failed to react with error indicator");
                }
                if let Err(e) = messenger.reply(&self.messages.lens_error).await {
                    warn!(error = %e, "Failed to send lens error reply");
                }
                LensOutcome::Failed { cleanup }
            }
        }
    }

    /// Every path a thumbnail was staged under is pushed to `staged` before
    /// anything can fail afterwards.
    async fn run(
        &self,
        image_url: &str,
        messenger: &dyn MessagePort,
        staged: &mut Vec<PathBuf>,
    ) -> Result<Delivered, PipelineError> {
        messenger.react(&self.messages.processing_reaction).await?;

        let results = self.lens.lookup(image_url).await?;
        debug!(count = results.len(), "Lens results received");

        let downloads = self.download_all(results.iter().map(|r| r.thumbnail_url.as_str())).await;

        let mut attachments = Vec::with_capacity(downloads.len());
        let mut first_error: Option<DownloadError> = None;
        for download in downloads {
            match download {
                Ok(attachment) => {
                    staged.push(attachment.path().to_path_buf());
                    attachments.push(attachment);
                }
                Err(e) => {
                    warn!(error = %e, "Thumbnail download failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error
            && self.options.download_policy == DownloadPolicy::FailFast
        {
            return Err(e.into());
        }

        let body = self.formatter.format(&results);
        let delivered = Delivered {
            results: results.len(),
            attachments: attachments.len(),
        };

        messenger.react(&self.messages.success_reaction).await?;
        messenger
            .send(OutgoingMessage::text(body).with_attachments(attachments))
            .await?;

        Ok(delivered)
    }

    /// Downloads concurrently; output order matches input order and every
    /// download runs to completion so no staged file goes untracked.
    async fn download_all<'a>(
        &self,
        urls: impl Iterator<Item = &'a str>,
    ) -> Vec<Result<Attachment, DownloadError>> {
        stream::iter(urls.map(|url| self.downloader.fetch_thumbnail(url)))
            .buffered(self.options.max_concurrent_downloads.max(1))
            .collect()
            .await
    }
}

/// URL of the first replied attachment, if it is a photo or sticker.
fn first_image_url(attachments: &[ReplyAttachment]) -> Option<String> {
    attachments
        .first()
        .filter(|a| a.kind.is_image())
        .map(|a| a.url.clone())
}
