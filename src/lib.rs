//! imagine-lens - media pipelines for chat-bot hosts.
//!
//! This crate provides two request-driven pipelines: text-to-image generation
//! with translation and bounded retry, and reverse image search with thumbnail
//! staging and cleanup. Hosts plug in through the `MessagePort` trait.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "imagine-lens";
