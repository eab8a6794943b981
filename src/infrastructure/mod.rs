//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// HTTP backend clients.
pub mod backends;
/// Attachment staging on disk.
pub mod cache;
/// Terminal chat host.
pub mod console;

pub use backends::{
    GlensClient, GoogleTranslateClient, HttpImageFetcher, ImagineClient, build_http_client,
};
pub use cache::DiskStagingCache;
pub use config::{AppConfig, CliArgs, Command, ConfigStore, LogLevel};
pub use console::ConsoleMessenger;
