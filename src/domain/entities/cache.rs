//! Staged cache file entity.

use std::path::PathBuf;

/// Pipeline that staged a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheOrigin {
    /// Imagine pipeline output.
    Generation,
    /// Lens pipeline thumbnail.
    Lens,
}

impl std::fmt::Display for CacheOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generation => write!(f, "generation"),
            Self::Lens => write!(f, "lens"),
        }
    }
}

/// A file written into the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFile {
    /// Absolute path of the staged file.
    pub path: PathBuf,
    /// Pipeline that wrote it.
    pub created_by: CacheOrigin,
}

impl CachedFile {
    /// Creates a cached file record.
    #[must_use]
    pub const fn new(path: PathBuf, created_by: CacheOrigin) -> Self {
        Self { path, created_by }
    }
}

/// Result of a best-effort delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The file existed and was deleted.
    Removed,
    /// Nothing was at the path.
    Missing,
}
