//! Message payloads exchanged with the chat host.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Kind of attachment on a replied-to message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// Uploaded photo.
    Photo,
    /// Sticker image.
    Sticker,
    /// Anything else (audio, video, files).
    #[serde(other)]
    Other,
}

impl AttachmentKind {
    /// Returns true for kinds the lens pipeline can search.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Photo | Self::Sticker)
    }
}

/// Attachment found on the message a command replied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyAttachment {
    /// Attachment kind as reported by the host.
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    /// Public URL of the attachment.
    pub url: String,
}

impl ReplyAttachment {
    /// Creates a reply attachment.
    #[must_use]
    pub fn new(kind: AttachmentKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

/// Readable stream over a staged file, handed to the host for upload.
pub struct Attachment {
    name: String,
    path: PathBuf,
    reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl Attachment {
    /// Wraps an open reader for the staged file at `path`.
    #[must_use]
    pub fn new(path: PathBuf, reader: Box<dyn AsyncRead + Send + Unpin>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path, reader }
    }

    /// File name shown to recipients.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Staged path backing the stream.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drains the stream into memory.
    ///
    /// # Errors
    /// Returns error if the underlying read fails.
    pub async fn read_all(mut self) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf).await?;
        Ok(buf)
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Message sent back to the channel.
#[derive(Debug, Default)]
pub struct OutgoingMessage {
    /// Text body.
    pub body: Option<String>,
    /// Attachments, in display order.
    pub attachments: Vec<Attachment>,
}

impl OutgoingMessage {
    /// Creates a text-only message.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            attachments: Vec::new(),
        }
    }

    /// Adds attachments.
    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }
}
