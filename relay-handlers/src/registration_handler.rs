//! `/start`: registers the sender once and posts their anchor announcement into the group.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use storage::UserRecord;
use tracing::{error, info, instrument};

use crate::command::is_start_command;
use crate::context::RelayContext;
use crate::display_name::display_name;

/// Handles the registration command; ignores every other message.
///
/// New user: welcome reply, group announcement, record with count 1 anchored at the announcement, persist.
/// Known user: "already registered" reply, no state change.
pub struct RegistrationHandler {
    ctx: Arc<RelayContext>,
}

impl RegistrationHandler {
    pub fn new(ctx: Arc<RelayContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for RegistrationHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() || !is_start_command(&message.content, self.ctx.bot_username()) {
            return Ok(HandlerResponse::Ignore);
        }

        let user_id = message.user.id;
        let mut registry = self.ctx.state.lock().await;

        if registry.contains(user_id) {
            info!(user_id, "step: user already registered");
            self.ctx
                .bot
                .reply_to(message, &self.ctx.texts.already_registered)
                .await?;
            return Ok(HandlerResponse::Stop);
        }

        let name = display_name(&message.user);
        self.ctx
            .bot
            .send_html(&message.chat, &self.ctx.texts.welcome_html)
            .await?;

        let announcement = self.ctx.texts.announcement(&name);
        let anchor_id = self
            .ctx
            .bot
            .send_message_and_return_id(&self.ctx.group, &announcement)
            .await?;

        registry.insert_new(user_id, UserRecord::new(name.clone(), anchor_id));
        info!(user_id, username = %name, anchor_id, "step: user registered");

        if let Err(e) = self.ctx.state.persist(&registry).await {
            error!(error = %e, user_id, "Error writing user data file");
        }

        Ok(HandlerResponse::Stop)
    }
}
