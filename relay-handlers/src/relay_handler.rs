//! Copies a registered user's message into the group as a reply to their anchor, up to the message limit.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use crate::context::RelayContext;

/// Terminal handler for everything that is not `/start`. Always stops the chain.
pub struct RelayHandler {
    ctx: Arc<RelayContext>,
}

impl RelayHandler {
    pub fn new(ctx: Arc<RelayContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.id;

        if self.ctx.is_from_bot(&message.user) {
            info!(user_id, "Ignoring message from the bot itself");
            return Ok(HandlerResponse::Stop);
        }

        let mut registry = self.ctx.state.lock().await;

        let Some(record) = registry.get(user_id) else {
            info!(user_id, "step: unregistered user, asking to /start");
            self.ctx
                .bot
                .reply_to(message, &self.ctx.texts.register_prompt)
                .await?;
            return Ok(HandlerResponse::Stop);
        };

        // Limit check precedes the copy; the count only moves on a successful copy.
        if record.has_reached(self.ctx.message_limit) {
            info!(
                user_id,
                message_count = record.message_count,
                limit = self.ctx.message_limit,
                "step: message limit reached, relay refused"
            );
            self.ctx
                .bot
                .reply_to(message, &self.ctx.texts.limit_reached)
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        let anchor_id = record.first_message_id;
        match self
            .ctx
            .bot
            .copy_message(&self.ctx.group, message, anchor_id)
            .await
        {
            Ok(copy_id) => {
                let message_count = registry.increment(user_id);
                info!(
                    user_id,
                    copy_id,
                    anchor_id,
                    message_count = ?message_count,
                    "Message copied successfully"
                );
                if let Err(e) = self.ctx.state.persist(&registry).await {
                    error!(error = %e, user_id, "Error writing user data file");
                }
            }
            Err(e) => {
                error!(error = %e, user_id, message_id = message.id, "Error relaying message");
            }
        }

        Ok(HandlerResponse::Stop)
    }
}
