//! Domain entity definitions.

mod cache;
mod generation;
mod lens;
mod message;
mod retry;

pub use cache::{CacheOrigin, CachedFile, RemoveOutcome};
pub use generation::{GeneratedImage, GenerationRequest};
pub use lens::{LensResult, MAX_LENS_RESULTS};
pub use message::{Attachment, AttachmentKind, OutgoingMessage, ReplyAttachment};
pub use retry::{DEFAULT_MAX_ATTEMPTS, RetryState, RetryStep};
