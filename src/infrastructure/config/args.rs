//! Command-line arguments.

use super::app_config::LogLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::entities::AttachmentKind;

/// Command-line arguments; set options override the config file.
#[derive(Debug, Parser)]
#[command(
    name = "imagine-lens",
    version,
    about = "Run the imagine and lens pipelines against the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Staging directory for attachments.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Attempts before the imagine pipeline gives up.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Render lens labels in bold letters.
    #[arg(long)]
    pub bold_labels: Option<bool>,

    /// Pipeline to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Pipelines the binary can run.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate images from text.
    Imagine {
        /// Prompt words.
        prompt: Vec<String>,
    },
    /// Reverse search an image by URL.
    Lens {
        /// URL of the image to search.
        image_url: String,

        /// Kind of the replied-to attachment.
        #[arg(long, value_enum, default_value_t = ReplyKind::Photo)]
        kind: ReplyKind,
    },
}

/// Attachment kind as the host would report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplyKind {
    /// A photo.
    Photo,
    /// A sticker.
    Sticker,
    /// Anything else, such as a document.
    Other,
}

impl From<ReplyKind> for AttachmentKind {
    fn from(kind: ReplyKind) -> Self {
        match kind {
            ReplyKind::Photo => Self::Photo,
            ReplyKind::Sticker => Self::Sticker,
            ReplyKind::Other => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imagine_collects_prompt_words() {
        let args = CliArgs::try_parse_from(["imagine-lens", "imagine", "un", "gato", "azul"]).unwrap();
        let Command::Imagine { prompt } = args.command else {
            panic!("expected imagine");
        };
        assert_eq!(prompt, ["un", "gato", "azul"]);
    }

    #[test]
    fn test_imagine_allows_empty_prompt() {
        let args = CliArgs::try_parse_from(["imagine-lens", "imagine"]).unwrap();
        assert!(matches!(args.command, Command::Imagine { prompt } if prompt.is_empty()));
    }

    #[test]
    fn test_lens_kind_defaults_to_photo() {
        let args = CliArgs::try_parse_from(["imagine-lens", "lens", "https://x/y.png"]).unwrap();
        let Command::Lens { image_url, kind } = args.command else {
            panic!("expected lens");
        };
        assert_eq!(image_url, "https://x/y.png");
        assert_eq!(AttachmentKind::from(kind), AttachmentKind::Photo);
    }
}
