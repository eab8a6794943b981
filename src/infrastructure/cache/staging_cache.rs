//! Disk-backed staging directory for outgoing attachments.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace, warn};

use crate::domain::entities::{Attachment, CacheOrigin, CachedFile, RemoveOutcome};
use crate::domain::ports::{CacheError, CacheResult, StagingPort};

/// Staging area rooted at one directory.
///
/// The directory is created once in [`DiskStagingCache::new`]; every file
/// written afterwards lives directly inside it.
#[derive(Debug, Clone)]
pub struct DiskStagingCache {
    cache_dir: PathBuf,
}

impl DiskStagingCache {
    /// Creates the cache, making `cache_dir` (recursively) if absent.
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be created.
    pub async fn new(cache_dir: PathBuf) -> CacheResult<Self> {
        fs::create_dir_all(&cache_dir)
            .await
            .map_err(|e| CacheError::CreateDir {
                path: cache_dir.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %cache_dir.display(), "Staging cache ready");

        Ok(Self { cache_dir })
    }

    fn cache_path(&self, name: &str) -> CacheResult<PathBuf> {
        let is_plain = Path::new(name)
            .file_name()
            .is_some_and(|file_name| file_name == name);
        if !is_plain {
            return Err(CacheError::InvalidName(name.to_string()));
        }
        Ok(self.cache_dir.join(name))
    }

    #[cfg(test)]
    pub async fn contains(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }
}

#[async_trait]
impl StagingPort for DiskStagingCache {
    async fn stage(
        &self,
        bytes: &[u8],
        name: &str,
        origin: CacheOrigin,
    ) -> CacheResult<CachedFile> {
        let path = self.cache_path(name)?;
        let write_error = |e: std::io::Error| CacheError::Write {
            path: path.clone(),
            message: e.to_string(),
        };

        let file = fs::File::create(&path).await.map_err(write_error)?;
        write_or_discard(&path, file, bytes)
            .await
            .map_err(write_error)?;

        debug!(path = %path.display(), size = bytes.len(), origin = %origin, "Staged file");

        Ok(CachedFile::new(path, origin))
    }

    async fn open_for_send(&self, path: &Path) -> CacheResult<Attachment> {
        let file = fs::File::open(path).await.map_err(|e| CacheError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        trace!(path = %path.display(), "Opened staged file");

        Ok(Attachment::new(path.to_path_buf(), Box::new(file)))
    }

    async fn remove(&self, path: &Path) -> CacheResult<RemoveOutcome> {
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Removed staged file");
                Ok(RemoveOutcome::Removed)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Staged file already gone");
                Ok(RemoveOutcome::Missing)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to remove staged file");
                Err(CacheError::Delete {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        }
    }

    fn dir(&self) -> &Path {
        &self.cache_dir
    }
}

/// Writes `bytes` through `writer`. On failure the partial file at `path`
/// is removed so nothing untracked stays in the cache.
async fn write_or_discard<W>(path: &Path, mut writer: W, bytes: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written: std::io::Result<()> = async {
        writer.write_all(bytes).await?;
        writer.flush().await
    }
    .await;
    drop(writer);

    if let Err(e) = written {
        match fs::remove_file(path).await {
            Ok(()) => debug!(path = %path.display(), "Removed partially written file"),
            Err(remove) if remove.kind() == std::io::ErrorKind::NotFound => {}
            Err(remove) => {
                warn!(path = %path.display(), error = %remove, "Failed to remove partially written file");
            }
        }
        return Err(e);
    }

    Ok(())
}

/// Returns the default cache directory path.
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "linuxmobile", "imagine-lens").map_or_else(
        || std::env::temp_dir().join("imagine-lens").join("staging"),
        |dirs| dirs.cache_dir().join("staging"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_cache() -> (DiskStagingCache, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let cache = DiskStagingCache::new(temp_dir.path().join("cache"))
            .await
            .unwrap();
        (cache, temp_dir)
    }

    #[tokio::test]
    async fn test_new_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a").join("b");

        let cache = DiskStagingCache::new(dir.clone()).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(cache.dir(), dir.as_path());
    }

    #[tokio::test]
    async fn test_stage_then_open_round_trips_bytes() {
        let (cache, _temp) = create_test_cache().await;
        let data: Vec<u8> = (0..=255).collect();

        let file = cache
            .stage(&data, "cache_0.png", CacheOrigin::Generation)
            .await
            .unwrap();
        assert_eq!(file.created_by, CacheOrigin::Generation);
        assert_eq!(file.path, cache.dir().join("cache_0.png"));

        let attachment = cache.open_for_send(&file.path).await.unwrap();
        assert_eq!(attachment.name(), "cache_0.png");
        assert_eq!(attachment.read_all().await.unwrap(), data);
    }

    #[tokio::test]
    async fn test_stage_overwrites_same_name() {
        let (cache, _temp) = create_test_cache().await;

        cache
            .stage(b"first", "cache_0.png", CacheOrigin::Generation)
            .await
            .unwrap();
        let file = cache
            .stage(b"second", "cache_0.png", CacheOrigin::Generation)
            .await
            .unwrap();

        let attachment = cache.open_for_send(&file.path).await.unwrap();
        assert_eq!(attachment.read_all().await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_stage_rejects_path_names() {
        let (cache, _temp) = create_test_cache().await;

        for name in ["../escape.jpg", "nested/file.jpg", ""] {
            let result = cache.stage(b"x", name, CacheOrigin::Lens).await;
            assert!(matches!(result, Err(CacheError::InvalidName(_))), "{name}");
        }
    }

    #[tokio::test]
    async fn test_remove_reports_outcome() {
        let (cache, _temp) = create_test_cache().await;
        let file = cache
            .stage(b"thumb", "abc.jpg", CacheOrigin::Lens)
            .await
            .unwrap();

        assert!(cache.contains(&file.path).await);
        assert_eq!(cache.remove(&file.path).await.unwrap(), RemoveOutcome::Removed);
        assert!(!cache.contains(&file.path).await);
        assert_eq!(cache.remove(&file.path).await.unwrap(), RemoveOutcome::Missing);
    }

    #[tokio::test]
    async fn test_open_missing_file_fails() {
        let (cache, _temp) = create_test_cache().await;
        let result = cache.open_for_send(&cache.dir().join("nope.jpg")).await;
        assert!(matches!(result, Err(CacheError::Open { .. })));
    }

    #[tokio::test]
    async fn test_failed_write_removes_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.jpg");
        std::fs::write(&path, b"half").unwrap();

        let writer = tokio_test::io::Builder::new()
            .write_error(std::io::Error::other("no space left on device"))
            .build();

        let result = write_or_discard(&path, writer, b"thumbnail-bytes").await;

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
