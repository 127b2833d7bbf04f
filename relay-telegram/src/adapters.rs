//! Adapters from Telegram (teloxide) types to relay_core types.
//! Depends only on teloxide and relay_core type definitions.

use relay_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0,
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat::new(self.0.chat.id.0, self.chat_type()),
            content: self
                .0
                .text()
                .or_else(|| self.0.caption())
                .unwrap_or("")
                .to_string(),
            message_type: self.message_type().to_string(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }

    /// `"text"` for plain text, else the media kind; service messages map to `"other"`.
    fn message_type(&self) -> &'static str {
        let msg = self.0;
        if msg.text().is_some() {
            "text"
        } else if msg.photo().is_some() {
            "photo"
        } else if msg.animation().is_some() {
            "animation"
        } else if msg.video().is_some() {
            "video"
        } else if msg.video_note().is_some() {
            "video_note"
        } else if msg.voice().is_some() {
            "voice"
        } else if msg.audio().is_some() {
            "audio"
        } else if msg.document().is_some() {
            "document"
        } else if msg.sticker().is_some() {
            "sticker"
        } else if msg.contact().is_some() {
            "contact"
        } else if msg.location().is_some() {
            "location"
        } else {
            "other"
        }
    }
}
