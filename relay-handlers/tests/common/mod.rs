//! Shared fixtures for relay-handlers integration tests.

pub mod mock_bot;

use std::sync::Arc;

use handler_chain::HandlerChain;
use relay_core::{Chat, Message, User};
use relay_handlers::{
    InboundFilter, RegistrationHandler, RelayContext, RelayHandler, RelayState, RelayTexts,
    DEFAULT_MESSAGE_LIMIT,
};
use storage::RegistryStore;

use mock_bot::MockBot;

pub const GROUP_CHAT_ID: i64 = -100_500;
pub const BOT_ID: i64 = 999;

pub fn bot_user() -> User {
    User {
        id: BOT_ID,
        username: Some("relay_bot".to_string()),
        first_name: Some("Relay".to_string()),
        last_name: None,
    }
}

pub fn user(id: i64, username: Option<&str>) -> User {
    User {
        id,
        username: username.map(str::to_string),
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
    }
}

/// Text message sent by `user` in its private chat.
pub fn private_text(user: &User, message_id: i32, text: &str) -> Message {
    Message {
        id: message_id,
        user: user.clone(),
        chat: Chat::new(user.id, "private"),
        content: text.to_string(),
        message_type: "text".to_string(),
    }
}

/// Photo message (with optional caption) sent by `user` in its private chat.
pub fn private_photo(user: &User, message_id: i32, caption: &str) -> Message {
    Message {
        message_type: "photo".to_string(),
        ..private_text(user, message_id, caption)
    }
}

/// Text message sent by `user` inside the destination group.
pub fn group_text(user: &User, message_id: i32, text: &str) -> Message {
    Message {
        chat: Chat::new(GROUP_CHAT_ID, "group"),
        ..private_text(user, message_id, text)
    }
}

/// Chain wired the way the bot runs it: filter → registration → relay.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub ctx: Arc<RelayContext>,
    pub chain: HandlerChain,
}

impl Harness {
    pub async fn new(store: Arc<dyn RegistryStore>) -> Self {
        let bot = Arc::new(MockBot::new(bot_user()));
        let ctx = Arc::new(RelayContext {
            bot: bot.clone(),
            bot_user: bot_user(),
            group: Chat::new(GROUP_CHAT_ID, "group"),
            state: RelayState::load(store).await,
            texts: RelayTexts::default(),
            message_limit: DEFAULT_MESSAGE_LIMIT,
        });
        let chain = HandlerChain::new()
            .add_handler(Arc::new(InboundFilter::new(ctx.clone())))
            .add_handler(Arc::new(RegistrationHandler::new(ctx.clone())))
            .add_handler(Arc::new(RelayHandler::new(ctx.clone())));
        Self { bot, ctx, chain }
    }
}
