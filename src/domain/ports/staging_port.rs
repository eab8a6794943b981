//! Port definition for the local staging cache.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Attachment, CacheOrigin, CachedFile, RemoveOutcome};

/// Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Errors that can occur during cache operations.
#[derive(Debug, Clone, thiserror::Error)]
#[allow(missing_docs)]
pub enum CacheError {
    /// Cache directory could not be created.
    #[error("Failed to create cache dir {}: {message}", path.display())]
    CreateDir { path: PathBuf, message: String },
    /// Name would escape the cache directory.
    #[error("Invalid cache file name: {0}")]
    InvalidName(String),
    /// Write failed.
    #[error("Failed to write cache file {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
    /// Staged file could not be opened.
    #[error("Failed to open cache file {}: {message}", path.display())]
    Open { path: PathBuf, message: String },
    /// Delete failed for a reason other than absence.
    #[error("Failed to delete cache file {}: {message}", path.display())]
    Delete { path: PathBuf, message: String },
}

/// Port for the scoped on-disk staging area.
///
/// Implementations enforce no ordering between calls; callers stage a path
/// before opening or removing it.
#[async_trait::async_trait]
pub trait StagingPort: Send + Sync {
    /// Writes `bytes` under `name`, replacing any previous file of that name.
    async fn stage(&self, bytes: &[u8], name: &str, origin: CacheOrigin)
    -> CacheResult<CachedFile>;

    /// Opens a staged file as an attachable stream.
    async fn open_for_send(&self, path: &Path) -> CacheResult<Attachment>;

    /// Deletes a staged file. A missing file is not an error.
    async fn remove(&self, path: &Path) -> CacheResult<RemoveOutcome>;

    /// Directory this cache writes into.
    fn dir(&self) -> &Path;
}
