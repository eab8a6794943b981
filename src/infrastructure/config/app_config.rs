//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::dto::{ImagineOptions, LensOptions, PipelineMessages};
use crate::infrastructure::backends::{
    DEFAULT_GENERATE_URL, DEFAULT_LENS_URL, DEFAULT_TRANSLATE_URL, USER_AGENT,
};
use crate::infrastructure::cache::staging_cache::default_cache_dir;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// HTTP client settings shared by every backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header.
    pub user_agent: String,
}

impl HttpConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Backend endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Translation endpoint.
    pub translate_url: String,
    /// Image generation endpoint.
    pub generate_url: String,
    /// Reverse image search endpoint.
    pub lens_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            generate_url: DEFAULT_GENERATE_URL.to_string(),
            lens_url: DEFAULT_LENS_URL.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Staging directory for attachments.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Backend endpoints.
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Imagine pipeline options.
    #[serde(default)]
    pub imagine: ImagineOptions,

    /// Lens pipeline options.
    #[serde(default)]
    pub lens: LensOptions,

    /// User-facing strings.
    #[serde(default)]
    pub messages: PipelineMessages,
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(cache_dir) = &args.cache_dir {
            self.cache_dir = Some(cache_dir.clone());
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.http.timeout_secs = timeout_secs;
        }
        if let Some(max_attempts) = args.max_attempts {
            self.imagine.max_attempts = max_attempts;
        }
        if let Some(bold_labels) = args.bold_labels {
            self.lens.bold_labels = bold_labels;
        }
    }

    /// Returns effective staging directory.
    #[must_use]
    pub fn effective_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }
}
