//! Locating, loading and seeding the TOML configuration file.

use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "imagine-lens";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULTS_HEADER: &str = "\
# imagine-lens configuration.
# Remove a key to fall back to its built-in default.

";

/// Errors raised while locating or seeding the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no configuration directory.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Reading or writing the file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The default configuration could not be rendered.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// The configuration file the binary reads on startup.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Uses `path_override` when given, otherwise `config.toml` in the
    /// platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` if no override is given and
    /// the platform directory cannot be determined.
    pub fn locate(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path_override {
            Some(path) => path.to_path_buf(),
            None => ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
                .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
                .ok_or(ConfigError::ConfigDirNotFound)?,
        };
        Ok(Self { path })
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// A missing file is seeded with the defaults (every endpoint and
    /// user-facing string spelled out so operators can edit them). A file
    /// that does not parse is left untouched and the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or seeded.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Config file not found, writing defaults");
            let config = AppConfig::default();
            self.write_defaults(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = %self.path.display(), "Loaded config");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse config, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    fn write_defaults(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let content = format!("{DEFAULTS_HEADER}{}", toml::to_string_pretty(config)?);

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::DownloadPolicy;
    use crate::infrastructure::backends::DEFAULT_GENERATE_URL;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_seeded_with_editable_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let store = ConfigStore::locate(Some(&path)).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.imagine.max_attempts, 3);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# imagine-lens configuration."));
        assert!(content.contains(DEFAULT_GENERATE_URL));
        assert!(content.contains("Please provide something to imagine."));

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.endpoints, config.endpoints);
        assert_eq!(reloaded.messages, config.messages);
    }

    #[test]
    fn test_malformed_file_falls_back_without_overwriting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "invalid_toml = [").unwrap();

        let config = ConfigStore::locate(Some(&path)).unwrap().load().unwrap();

        assert_eq!(config.lens.max_results, 6);
        assert_eq!(fs::read_to_string(&path).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_explicit_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[imagine]\nmax_attempts = 7\n\n[lens]\ndownload_policy = \"best_effort\"\n",
        )
        .unwrap();

        let store = ConfigStore::locate(Some(&path)).unwrap();
        let config = store.load().unwrap();

        assert_eq!(store.path(), path.as_path());
        assert_eq!(config.imagine.max_attempts, 7);
        assert_eq!(config.lens.download_policy, DownloadPolicy::BestEffort);
    }
}
