//! Drops messages that must never reach the relay: human chatter inside the destination group and the bot's own messages.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Handler, Message, Result};
use tracing::{info, instrument};

use crate::context::RelayContext;

/// Stops the chain in before() for group messages not sent by the bot, and for anything sent by the bot. Never fails.
pub struct InboundFilter {
    ctx: Arc<RelayContext>,
}

impl InboundFilter {
    pub fn new(ctx: Arc<RelayContext>) -> Self {
        Self { ctx }
    }

    fn log_suppressed(message: &Message, origin: &str) {
        if message.is_text() {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_content = %message.content,
                "Message ignored from {}", origin
            );
        } else {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_type = %message.message_type,
                "Non-text message ignored from {}", origin
            );
        }
    }
}

#[async_trait]
impl Handler for InboundFilter {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let from_bot = self.ctx.is_from_bot(&message.user);

        if message.chat.id == self.ctx.group.id && !from_bot {
            Self::log_suppressed(message, "group chat");
            return Ok(false);
        }
        if from_bot {
            Self::log_suppressed(message, "the bot itself");
            return Ok(false);
        }

        Ok(true)
    }
}
