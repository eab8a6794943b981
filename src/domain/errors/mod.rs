//! Domain error types.

mod download_error;
mod generation_error;
mod lens_error;
mod message_error;
mod pipeline_error;
mod translation_error;

pub use download_error::DownloadError;
pub use generation_error::GenerationError;
pub use lens_error::LensError;
pub use message_error::MessageError;
pub use pipeline_error::PipelineError;
pub use translation_error::TranslationError;
