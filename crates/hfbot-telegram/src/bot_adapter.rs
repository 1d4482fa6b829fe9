//! Wraps teloxide::Bot and implements [`hfbot_core::Bot`]. Production code sends messages via Telegram;
//! tests can substitute another Bot impl.

use std::time::Duration;

use async_trait::async_trait;
use hfbot_core::{Bot as CoreBot, HfbotError, InboundMessage, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ReplyParameters};
use tracing::info;

use crate::config::TelegramConfig;

/// Slack added on top of the long-poll timeout for the HTTP client timeout.
const HTTP_TIMEOUT_SLACK_SECS: u64 = 10;

/// Builds a teloxide Bot from config: custom API URL if set, and an HTTP timeout longer than
/// the long-poll timeout so getUpdates is not cut short by the client.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let client = teloxide::net::default_reqwest_settings()
        .timeout(Duration::from_secs(
            config.poll_timeout_secs as u64 + HTTP_TIMEOUT_SLACK_SECS,
        ))
        .build()
        .map_err(|e| HfbotError::Config(format!("Failed to build HTTP client: {}", e)))?;

    let mut bot = teloxide::Bot::with_client(config.bot_token.clone(), client);
    if let Some(ref url_str) = config.telegram_api_url {
        let url = reqwest::Url::parse(url_str)
            .map_err(|e| HfbotError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", url_str, e)))?;
        bot = bot.set_api_url(url);
    }
    Ok(bot)
}

/// Calls getMe to check the token. Returns the bot's username (empty if it has none).
pub async fn verify_bot(bot: &teloxide::Bot) -> Result<String> {
    let me = bot
        .get_me()
        .await
        .map_err(|e| HfbotError::Bot(format!("getMe failed: {}", e)))?;
    let username = me.user.username.clone().unwrap_or_default();
    info!(username = %username, bot_id = me.user.id.0, "Authorized on account");
    Ok(username)
}

/// Thin wrapper around teloxide::Bot that implements hfbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn reply_to(&self, message: &InboundMessage, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(MessageId(message.id)))
            .await
            .map_err(|e| HfbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn copy_message(&self, message: &InboundMessage) -> Result<()> {
        let chat_id = ChatId(message.chat.id);
        self.bot
            .copy_message(chat_id, chat_id, MessageId(message.id))
            .await
            .map_err(|e| HfbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
