//! Application services shared by the pipelines.

pub mod image_downloader;
pub mod pipeline_cleanup;
pub mod result_formatter;

pub use image_downloader::ImageDownloader;
pub use pipeline_cleanup::PipelineCleanup;
pub use result_formatter::{ResultFormatter, to_bold};
