//! Long-polling update source over getUpdates.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use hfbot_core::{InboundUpdate, UpdateSource};
use teloxide::payloads::GetUpdatesSetters;
use teloxide::requests::Requester;
use teloxide::RequestError;
use tracing::{debug, error};

use crate::adapters::TelegramUpdateWrapper;

/// Pause after a failed getUpdates call before polling again.
const ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Polls getUpdates with offset tracking and yields updates one at a time.
///
/// The offset only advances once a batch has been received, so dropping a pending
/// `next_update` never loses updates: Telegram resends anything not yet confirmed.
pub struct LongPollingSource {
    bot: teloxide::Bot,
    offset: i32,
    timeout_secs: u32,
    pending: VecDeque<InboundUpdate>,
}

impl LongPollingSource {
    pub fn new(bot: teloxide::Bot, timeout_secs: u32) -> Self {
        Self {
            bot,
            offset: 0,
            timeout_secs,
            pending: VecDeque::new(),
        }
    }

    /// Offset the next getUpdates call will send.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    async fn poll(&mut self) {
        match self
            .bot
            .get_updates()
            .offset(self.offset)
            .timeout(self.timeout_secs)
            .await
        {
            Ok(updates) => {
                for update in updates {
                    self.offset = update.id.0 as i32 + 1;
                    self.pending
                        .push_back(TelegramUpdateWrapper(&update).to_core());
                }
            }
            Err(RequestError::Network(e)) => {
                // Timeouts and dropped connections are routine during long polling.
                debug!(error = %e, "getUpdates network error, polling again");
                tokio::time::sleep(ERROR_BACKOFF).await;
            }
            Err(e) => {
                error!(error = %e, "Failed to get updates");
                tokio::time::sleep(ERROR_BACKOFF).await;
            }
        }
    }
}

#[async_trait]
impl UpdateSource for LongPollingSource {
    async fn next_update(&mut self) -> Option<InboundUpdate> {
        loop {
            if let Some(update) = self.pending.pop_front() {
                return Some(update);
            }
            self.poll().await;
        }
    }
}
