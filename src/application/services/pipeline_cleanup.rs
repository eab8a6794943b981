//! Best-effort removal of staged files.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error};

use crate::application::dto::CleanupReport;
use crate::domain::entities::RemoveOutcome;
use crate::domain::ports::StagingPort;

/// Deletes every file a pipeline staged, independently of each other.
#[derive(Clone)]
pub struct PipelineCleanup {
    staging: Arc<dyn StagingPort>,
}

impl PipelineCleanup {
    /// Creates a cleanup pass over `staging`.
    #[must_use]
    pub fn new(staging: Arc<dyn StagingPort>) -> Self {
        Self { staging }
    }

    /// Attempts to delete each path once. Failures are logged and reported,
    /// never propagated.
    pub async fn run(&self, paths: &[PathBuf]) -> CleanupReport {
        let mut report = CleanupReport::default();

        for path in paths {
            report.attempted += 1;
            match self.staging.remove(path).await {
                Ok(RemoveOutcome::Removed) => report.removed += 1,
                Ok(RemoveOutcome::Missing) => report.missing += 1,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to delete cache file");
                    report.failed.push(path.clone());
                }
            }
        }

        debug!(
            attempted = report.attempted,
            removed = report.removed,
            failed = report.failed.len(),
            "Cleanup finished"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CacheOrigin;
    use crate::infrastructure::cache::DiskStagingCache;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_removes_and_counts_missing() {
        let temp = TempDir::new().unwrap();
        let staging = Arc::new(DiskStagingCache::new(temp.path().to_path_buf()).await.unwrap());
        let a = staging.stage(b"a", "a.jpg", CacheOrigin::Lens).await.unwrap();
        let b = staging.stage(b"b", "b.jpg", CacheOrigin::Lens).await.unwrap();

        let report = PipelineCleanup::new(staging.clone())
            .run(&[a.path.clone(), temp.path().join("ghost.jpg"), b.path.clone()])
            .await;

        assert_eq!(report.attempted, 3);
        assert_eq!(report.removed, 2);
        assert_eq!(report.missing, 1);
        assert!(report.is_clean());
        assert!(!staging.contains(&a.path).await);
        assert!(!staging.contains(&b.path).await);
    }
}
