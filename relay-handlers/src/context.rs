use std::sync::Arc;

use relay_core::{Bot, Chat, User};

use crate::state::RelayState;
use crate::texts::RelayTexts;

/// Everything the handlers need, built once at startup and shared.
pub struct RelayContext {
    pub bot: Arc<dyn Bot>,
    /// The bot's own identity, from `Bot::me` at startup.
    pub bot_user: User,
    /// Destination group all messages are relayed into.
    pub group: Chat,
    pub state: RelayState,
    pub texts: RelayTexts,
    pub message_limit: u32,
}

impl RelayContext {
    pub fn is_from_bot(&self, user: &User) -> bool {
        user.id == self.bot_user.id
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_user.username.as_deref()
    }
}
