//! Application configuration.

/// Configuration sections and defaults.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Configuration file loading.
pub mod storage;

pub use app_config::{AppConfig, EndpointsConfig, HttpConfig, LogLevel};
pub use args::{CliArgs, Command, ReplyKind};
pub use storage::{ConfigError, ConfigStore};
