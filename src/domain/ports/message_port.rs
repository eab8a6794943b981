//! Chat host interaction port.

use async_trait::async_trait;

use crate::domain::entities::{OutgoingMessage, ReplyAttachment};
use crate::domain::errors::MessageError;

/// Capabilities a pipeline needs from the message that invoked it.
#[async_trait]
pub trait MessagePort: Send + Sync {
    /// Sends a new message to the channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), MessageError>;

    /// Replies to the invoking message.
    async fn reply(&self, text: &str) -> Result<(), MessageError>;

    /// Reacts to the invoking message.
    async fn react(&self, emoji: &str) -> Result<(), MessageError>;

    /// Attachments of the message the command replied to. Empty when the
    /// command was not a reply.
    fn replied_attachments(&self) -> &[ReplyAttachment];
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Mutex;

    /// Interaction captured by [`RecordingMessenger`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Recorded {
        Sent {
            body: Option<String>,
            attachments: Vec<Vec<u8>>,
        },
        Reply(String),
        React(String),
    }

    /// Messenger that records every interaction in order.
    pub struct RecordingMessenger {
        replied: Vec<ReplyAttachment>,
        events: Mutex<Vec<Recorded>>,
        fail_sends: AtomicBool,
    }

    impl RecordingMessenger {
        /// Creates a messenger with no replied-to attachments.
        pub fn new() -> Self {
            Self::replying_to(Vec::new())
        }

        /// Creates a messenger replying to a message with `attachments`.
        pub fn replying_to(attachments: Vec<ReplyAttachment>) -> Self {
            Self {
                replied: attachments,
                events: Mutex::new(Vec::new()),
                fail_sends: AtomicBool::new(false),
            }
        }

        /// Makes every `send` fail.
        pub fn set_fail_sends(&self, value: bool) {
            self.fail_sends.store(value, Ordering::SeqCst);
        }

        /// Returns recorded interactions.
        pub async fn events(&self) -> Vec<Recorded> {
            self.events.lock().await.clone()
        }

        /// Returns only the sent messages.
        pub async fn sent(&self) -> Vec<(Option<String>, Vec<Vec<u8>>)> {
            self.events()
                .await
                .into_iter()
                .filter_map(|e| match e {
                    Recorded::Sent { body, attachments } => Some((body, attachments)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Default for RecordingMessenger {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl MessagePort for RecordingMessenger {
        async fn send(&self, message: OutgoingMessage) -> Result<(), MessageError> {
            if self.fail_sends.load(Ordering::SeqCst) {
                return Err(MessageError::delivery("mock send failure"));
            }

            let mut attachments = Vec::with_capacity(message.attachments.len());
            for attachment in message.attachments {
                let name = attachment.name().to_string();
                let bytes = attachment.read_all().await.map_err(|e| MessageError::Attachment {
                    name,
                    message: e.to_string(),
                })?;
                attachments.push(bytes);
            }

            self.events.lock().await.push(Recorded::Sent {
                body: message.body,
                attachments,
            });
            Ok(())
        }

        async fn reply(&self, text: &str) -> Result<(), MessageError> {
            self.events.lock().await.push(Recorded::Reply(text.to_string()));
            Ok(())
        }

        async fn react(&self, emoji: &str) -> Result<(), MessageError> {
            self.events.lock().await.push(Recorded::React(emoji.to_string()));
            Ok(())
        }

        fn replied_attachments(&self) -> &[ReplyAttachment] {
            &self.replied
        }
    }
}
