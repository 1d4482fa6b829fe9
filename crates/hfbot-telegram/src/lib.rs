//! # hfbot-telegram
//!
//! Telegram layer: adapters from teloxide types to core types, [`hfbot_core::Bot`] implementation,
//! long-polling [`hfbot_core::UpdateSource`], and minimal config.
//! Handles only Telegram connectivity; routing and inference live elsewhere.

mod adapters;
mod bot_adapter;
mod config;
mod polling;

pub use adapters::{
    TelegramMessageWrapper, TelegramPhotoWrapper, TelegramUpdateWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{build_teloxide_bot, verify_bot, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use polling::LongPollingSource;
