//! Transport abstractions.
//!
//! [`Bot`] sends replies, [`UpdateSource`] yields inbound updates one at a time, and
//! [`MessageHandler`] consumes a single message. The Telegram implementations live in
//! hfbot-telegram; tests substitute their own.

use crate::error::Result;
use crate::types::{InboundMessage, InboundUpdate};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Outbound side of the transport: threaded replies and copies of inbound messages.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` to the message's chat as a threaded reply to that message.
    async fn reply_to(&self, message: &InboundMessage, text: &str) -> Result<()>;
    /// Copies the message back into the chat it came from.
    async fn copy_message(&self, message: &InboundMessage) -> Result<()>;
}

/// A lazy, effectively infinite sequence of inbound updates.
#[async_trait]
pub trait UpdateSource: Send {
    /// Waits for the next update. `None` means the source is exhausted.
    ///
    /// Must be cancel safe: dropping the future before it completes loses no update.
    async fn next_update(&mut self) -> Option<InboundUpdate>;
}

#[async_trait]
impl UpdateSource for mpsc::UnboundedReceiver<InboundUpdate> {
    async fn next_update(&mut self) -> Option<InboundUpdate> {
        self.recv().await
    }
}

#[async_trait]
impl UpdateSource for mpsc::Receiver<InboundUpdate> {
    async fn next_update(&mut self) -> Option<InboundUpdate> {
        self.recv().await
    }
}

/// Consumes one inbound message. Failures are handled inside; nothing is returned to the caller.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle_message(&self, message: &InboundMessage);
}
