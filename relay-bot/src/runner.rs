//! Bootstrap: logging, store, bot identity, handler chain, then the Telegram REPL.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use relay_core::{init_tracing, Bot, Chat};
use relay_handlers::{InboundFilter, RegistrationHandler, RelayContext, RelayHandler, RelayState};
use relay_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use storage::JsonFileStore;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Chain in processing order: inbound filter, `/start` registration, relay.
pub fn build_handler_chain(ctx: Arc<RelayContext>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(InboundFilter::new(ctx.clone())))
        .add_handler(Arc::new(RegistrationHandler::new(ctx.clone())))
        .add_handler(Arc::new(RelayHandler::new(ctx)))
}

/// Main entry: validate config, init logging, load the registry, fetch the bot identity, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file).context("Failed to initialize logging")?;

    info!(
        group_chat_id = config.group_chat_id,
        user_data_file = %config.user_data_file,
        message_limit = config.message_limit,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_user = bot
        .me()
        .await
        .context("Failed to fetch bot identity (check BOT_TOKEN)")?;
    info!(bot_id = bot_user.id, username = ?bot_user.username, "Bot identity fetched");

    let state = RelayState::load(Arc::new(JsonFileStore::new(&config.user_data_file))).await;

    let ctx = Arc::new(RelayContext {
        bot,
        bot_user,
        group: Chat::new(config.group_chat_id, "group"),
        state,
        texts: config.texts.clone(),
        message_limit: config.message_limit,
    });
    let handler_chain = build_handler_chain(ctx);

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await
}
