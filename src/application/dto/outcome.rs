//! Terminal states reported by the pipelines.

use std::path::PathBuf;

/// How an imagine invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagineOutcome {
    /// No prompt; only the missing-prompt message was sent.
    MissingPrompt,
    /// Images were delivered.
    Delivered {
        /// Attempts used, including the successful one.
        attempts: u32,
        /// Number of attachments sent.
        images: usize,
    },
    /// Every attempt failed and the failure message was sent.
    Failed {
        /// Attempts used.
        attempts: u32,
        /// Error text shown to the user.
        detail: String,
    },
}

/// How a lens invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensOutcome {
    /// The replied-to message had no searchable image.
    NoImage,
    /// Results were delivered.
    Delivered {
        /// Results in the text body.
        results: usize,
        /// Thumbnails attached.
        attachments: usize,
        /// Cleanup of staged thumbnails.
        cleanup: CleanupReport,
    },
    /// The apology message was sent.
    Failed {
        /// Cleanup of staged thumbnails.
        cleanup: CleanupReport,
    },
}

/// Summary of one cleanup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Delete attempts made.
    pub attempted: usize,
    /// Files deleted.
    pub removed: usize,
    /// Paths that were already gone.
    pub missing: usize,
    /// Paths that could not be deleted.
    pub failed: Vec<PathBuf>,
}

impl CleanupReport {
    /// Returns true when every staged file is gone.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
