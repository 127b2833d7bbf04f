//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Chat, DbotError, Message, Result, ToCoreUser, User};
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ParseMode, ReplyParameters},
};

use crate::adapters::TelegramUserWrapper;

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: teloxide::RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn me(&self) -> Result<User> {
        let me = self.bot.get_me().await.map_err(bot_error)?;
        Ok(TelegramUserWrapper(&me.user).to_core())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<i32> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(sent.id.0)
    }

    async fn copy_message(
        &self,
        to: &Chat,
        message: &Message,
        reply_to_message_id: i32,
    ) -> Result<i32> {
        let copied = self
            .bot
            .copy_message(ChatId(to.id), ChatId(message.chat.id), MessageId(message.id))
            .reply_parameters(ReplyParameters::new(MessageId(reply_to_message_id)))
            .await
            .map_err(bot_error)?;
        Ok(copied.0)
    }
}
