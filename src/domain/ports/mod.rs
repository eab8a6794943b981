//! Port definitions for the pipeline's external collaborators.

mod image_generation_port;
mod lens_port;
mod message_port;
mod staging_port;
mod translation_port;

pub use image_generation_port::ImageGenerationPort;
pub use lens_port::{LensPort, RemoteImagePort};
pub use message_port::MessagePort;
pub use staging_port::{CacheError, CacheResult, StagingPort};
pub use translation_port::TranslationPort;
