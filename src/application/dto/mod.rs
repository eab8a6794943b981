//! Data transfer objects for the application layer.

mod options;
mod outcome;

pub use options::{DownloadPolicy, ImagineOptions, LensOptions, PipelineMessages, StagingNames};
pub use outcome::{CleanupReport, ImagineOutcome, LensOutcome};
