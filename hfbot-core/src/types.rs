//! Core types: user, chat, photo, inbound message and the update envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker that starts a bot command (e.g. `/start`).
pub const COMMAND_PREFIX: char = '/';

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// One size of an attached photo. Telegram sends several sizes per photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
}

/// A single inbound message. Lives for one dispatch cycle and is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Transport message id; replies reference it.
    pub id: i32,
    /// Sender; `None` for messages sent on behalf of channels or anonymous admins.
    pub user: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
    pub photo: Vec<PhotoSize>,
    pub created_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Message text, or `""` when the message carries none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// True if the text starts with [`COMMAND_PREFIX`].
    pub fn is_command(&self) -> bool {
        self.text().starts_with(COMMAND_PREFIX)
    }

    pub fn has_photo(&self) -> bool {
        !self.photo.is_empty()
    }

    /// Sender id, or 0 when the sender is unknown. Used for log fields only.
    pub fn user_id(&self) -> i64 {
        self.user.as_ref().map(|u| u.id).unwrap_or(0)
    }
}

/// One event from the update feed. Exactly one variant is populated.
#[derive(Debug, Clone)]
pub enum InboundUpdate {
    /// A new message.
    Message(InboundMessage),
    /// Any other update kind (edited message, callback query, ...). Not handled.
    Other { update_id: u32, kind: &'static str },
}
