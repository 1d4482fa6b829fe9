//! Minimal Telegram config: token, API URL, poll timeout, log path.
//! Loaded from TELEGRAM_BOT_API_KEY, TELEGRAM_API_URL, TELEGRAM_POLL_TIMEOUT_SECS, LOG_FILE.

use anyhow::Result;
use std::env;

/// Default long-poll timeout for getUpdates, in seconds.
pub const DEFAULT_POLL_TIMEOUT_SECS: u32 = 60;

/// Default log file path.
pub const DEFAULT_LOG_FILE: &str = "logs/hfbot.log";

/// Telegram connection and logging config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// TELEGRAM_BOT_API_KEY
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// TELEGRAM_POLL_TIMEOUT_SECS
    pub poll_timeout_secs: u32,
    /// LOG_FILE
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides TELEGRAM_BOT_API_KEY if provided.
    /// The token must be present and non-empty.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_BOT_API_KEY").ok())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing or invalid TELEGRAM_BOT_API_KEY"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        let poll_timeout_secs = env::var("TELEGRAM_POLL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_TIMEOUT_SECS);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        let config = Self {
            bot_token,
            telegram_api_url,
            poll_timeout_secs,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config with the given token; everything else takes its default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Checks that telegram_api_url, when set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
