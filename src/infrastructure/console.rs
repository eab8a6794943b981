//! Terminal stand-in for a chat host.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::{OutgoingMessage, ReplyAttachment};
use crate::domain::errors::MessageError;
use crate::domain::ports::MessagePort;

/// Prints everything a pipeline would send to a chat channel.
#[derive(Debug, Default)]
pub struct ConsoleMessenger {
    replied: Vec<ReplyAttachment>,
}

impl ConsoleMessenger {
    /// Creates a messenger for a command that was not a reply.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            replied: Vec::new(),
        }
    }

    /// Creates a messenger for a command replying to a message with `attachments`.
    #[must_use]
    pub const fn replying_to(attachments: Vec<ReplyAttachment>) -> Self {
        Self {
            replied: attachments,
        }
    }
}

#[async_trait]
impl MessagePort for ConsoleMessenger {
    async fn send(&self, message: OutgoingMessage) -> Result<(), MessageError> {
        if let Some(body) = &message.body {
            println!("{body}");
        }

        for attachment in message.attachments {
            let name = attachment.name().to_string();
            let bytes = attachment
                .read_all()
                .await
                .map_err(|e| MessageError::Attachment {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            println!("[attachment] {name} ({} bytes)", bytes.len());
        }

        Ok(())
    }

    async fn reply(&self, text: &str) -> Result<(), MessageError> {
        println!("> {text}");
        Ok(())
    }

    async fn react(&self, emoji: &str) -> Result<(), MessageError> {
        debug!(emoji = %emoji, "Reaction");
        println!("[{emoji}]");
        Ok(())
    }

    fn replied_attachments(&self) -> &[ReplyAttachment] {
        &self.replied
    }
}
