//! Reverse image search result.

use serde::{Deserialize, Serialize};

/// Maximum number of results kept from one lookup.
pub const MAX_LENS_RESULTS: usize = 6;

/// One match returned by the reverse image search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LensResult {
    /// Page title.
    pub title: String,
    /// Site name the match was found on.
    pub source: String,
    /// Link to the matching page.
    pub link: String,
    /// Thumbnail of the matching image.
    pub thumbnail_url: String,
}

impl LensResult {
    /// Creates a result.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        link: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            link: link.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}
