//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for transport-facing operations (sending, copying, client setup).
#[derive(Error, Debug)]
pub enum HfbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`HfbotError`].
pub type Result<T> = std::result::Result<T, HfbotError>;
