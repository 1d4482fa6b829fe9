//! # hfbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`UpdateSource`], [`MessageHandler`], update and
//! message types, and tracing initialization. Transport-agnostic; used by hfbot-telegram and bot-runtime.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, MessageHandler, UpdateSource};
pub use error::{HfbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, InboundMessage, InboundUpdate, PhotoSize, User, COMMAND_PREFIX};
