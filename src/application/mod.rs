//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Pipeline services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ImagineOutcome, LensOutcome};
pub use use_cases::{ImagineUseCase, LensUseCase};
