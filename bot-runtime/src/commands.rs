//! Bot commands. Only `/start` is known; it is acknowledged in the log and never answered.

use hfbot_core::InboundMessage;
use tracing::{debug, info};

/// A command keyed by its exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Unknown(String),
}

impl Command {
    /// Parses the full message text. Matching is exact: `/start now` is unknown.
    pub fn parse(text: &str) -> Self {
        match text {
            "/start" => Command::Start,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Handles a command message. Sends nothing in either case.
pub fn handle_command(message: &InboundMessage, command: &Command) {
    match command {
        Command::Start => {
            info!(
                user_id = message.user_id(),
                chat_id = message.chat.id,
                "/start command received"
            );
        }
        Command::Unknown(text) => {
            debug!(chat_id = message.chat.id, command = %text, "Unknown command ignored");
        }
    }
}
