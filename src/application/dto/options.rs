//! Pipeline tuning options and user-facing strings.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DEFAULT_MAX_ATTEMPTS, MAX_LENS_RESULTS};

/// How generated images are named in the staging directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StagingNames {
    /// `cache_<index>.png`, shared by every invocation.
    #[default]
    Shared,
    /// `<invocation>_cache_<index>.png`, unique per invocation.
    PerInvocation,
}

impl StagingNames {
    /// Returns the file name for image `index` of `invocation`.
    #[must_use]
    pub fn file_name(self, index: usize, invocation: &str) -> String {
        match self {
            Self::Shared => format!("cache_{index}.png"),
            Self::PerInvocation => format!("{invocation}_cache_{index}.png"),
        }
    }
}

/// What to do when one thumbnail download fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadPolicy {
    /// Fail the whole lens request.
    #[default]
    FailFast,
    /// Send the results without the missing thumbnails.
    BestEffort,
}

/// Options for the imagine pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagineOptions {
    /// Attempts before reporting failure.
    pub max_attempts: u32,
    /// Staging file naming.
    pub staging_names: StagingNames,
}

impl Default for ImagineOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            staging_names: StagingNames::default(),
        }
    }
}

/// Options for the lens pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensOptions {
    /// Results kept from one lookup (capped at six).
    pub max_results: usize,
    /// Thumbnails downloaded at the same time.
    pub max_concurrent_downloads: usize,
    /// Reaction to a failed thumbnail download.
    pub download_policy: DownloadPolicy,
    /// Render labels in mathematical bold letters.
    pub bold_labels: bool,
}

impl Default for LensOptions {
    fn default() -> Self {
        Self {
            max_results: MAX_LENS_RESULTS,
            max_concurrent_downloads: 4,
            download_policy: DownloadPolicy::default(),
            bold_labels: true,
        }
    }
}

/// Strings and reactions shown to chat users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct PipelineMessages {
    pub missing_prompt: String,
    pub generation_success: String,
    pub generation_error: String,
    pub no_image: String,
    pub lens_error: String,
    pub processing_reaction: String,
    pub success_reaction: String,
    pub error_reaction: String,
}

impl Default for PipelineMessages {
    fn default() -> Self {
        Self {
            missing_prompt: "Please provide something to imagine.".to_string(),
            generation_success: "Images generated successfully ✅".to_string(),
            generation_error: "An error occurred while processing the request".to_string(),
            no_image: "⚠️ No image found in the replied message.".to_string(),
            lens_error: "⚠️ An error occurred while fetching the data.".to_string(),
            processing_reaction: "🕰️".to_string(),
            success_reaction: "✔️".to_string(),
            error_reaction: "✖️".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_names() {
        assert_eq!(StagingNames::Shared.file_name(2, "abc"), "cache_2.png");
        assert_eq!(
            StagingNames::PerInvocation.file_name(0, "abc"),
            "abc_cache_0.png"
        );
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: LensOptions = toml::from_str("download_policy = \"best_effort\"").unwrap();
        assert_eq!(options.download_policy, DownloadPolicy::BestEffort);
        assert_eq!(options.max_results, 6);
        assert!(options.bold_labels);
    }
}
