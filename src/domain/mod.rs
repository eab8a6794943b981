//! Domain layer with core pipeline entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{GenerationRequest, LensResult, OutgoingMessage, ReplyAttachment};
pub use errors::PipelineError;
pub use ports::{MessagePort, StagingPort};
