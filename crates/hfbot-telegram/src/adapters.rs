//! Adapters from Telegram (teloxide) types to hfbot_core types.
//! Depends only on teloxide and hfbot_core type definitions.

use hfbot_core::{Chat, InboundMessage, InboundUpdate, PhotoSize, User};
use teloxide::types::UpdateKind;
use tracing::warn;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            is_bot: self.0.is_bot,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide PhotoSize for conversion to core [`PhotoSize`].
pub struct TelegramPhotoWrapper<'a>(pub &'a teloxide::types::PhotoSize);

impl<'a> TelegramPhotoWrapper<'a> {
    pub fn to_core(&self) -> PhotoSize {
        PhotoSize {
            file_id: self.0.file.id.to_string(),
            file_unique_id: self.0.file.unique_id.to_string(),
            width: self.0.width,
            height: self.0.height,
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`InboundMessage`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    pub fn to_core(&self) -> InboundMessage {
        InboundMessage {
            id: self.0.id.0,
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core()),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            text: self.0.text().map(|s| s.to_string()),
            photo: self
                .0
                .photo()
                .map(|sizes| {
                    sizes
                        .iter()
                        .map(|p| TelegramPhotoWrapper(p).to_core())
                        .collect()
                })
                .unwrap_or_default(),
            created_at: self.0.date,
        }
    }

    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_group() {
            "group"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}

/// Wraps a teloxide Update for conversion to core [`InboundUpdate`].
/// Only new messages become [`InboundUpdate::Message`]; every other kind maps to `Other`.
/// Updates teloxide failed to parse map to `Other` with kind `"error"`.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> TelegramUpdateWrapper<'a> {
    pub fn to_core(&self) -> InboundUpdate {
        let kind = match &self.0.kind {
            UpdateKind::Message(msg) => {
                return InboundUpdate::Message(TelegramMessageWrapper(msg).to_core())
            }
            UpdateKind::EditedMessage(_) => "edited_message",
            UpdateKind::ChannelPost(_) => "channel_post",
            UpdateKind::EditedChannelPost(_) => "edited_channel_post",
            UpdateKind::InlineQuery(_) => "inline_query",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::Poll(_) => "poll",
            UpdateKind::MyChatMember(_) => "my_chat_member",
            UpdateKind::Error(raw) => {
                warn!(update_id = self.0.id.0, raw = %raw, "Update could not be parsed");
                "error"
            }
            _ => "other",
        };
        InboundUpdate::Other {
            update_id: self.0.id.0 as u32,
            kind,
        }
    }
}
