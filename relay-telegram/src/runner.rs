//! REPL runner: receives Telegram updates, converts them to core messages and runs the handler chain.

use handler_chain::HandlerChain;
use relay_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;

/// Runs the long-polling REPL until the process is stopped.
///
/// The dispatcher serialises updates per chat and runs different chats concurrently; each
/// update awaits the chain inline, and the registry lock serialises handler bodies across chats.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> anyhow::Result<()> {
    info!("Starting Telegram REPL");

    teloxide::repl(bot, move |_bot: Bot, msg: Message| {
        let handler_chain = handler_chain.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if core_msg.is_text() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    chat_type = %core_msg.chat.chat_type,
                    message_content = %core_msg.content,
                    "Received message"
                );
            } else {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    chat_type = %core_msg.chat.chat_type,
                    message_type = %core_msg.message_type,
                    "Received non-text message"
                );
            }

            if let Err(e) = handler_chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    message_id = core_msg.id,
                    "Handler chain failed"
                );
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}
