//! REPL runner: converts teloxide messages to core messages and passes them to the HandlerChain.
//!
//! teloxide's dispatcher processes updates of one chat sequentially and different chats
//! concurrently, which is exactly one logical conversation per user. The chain is therefore
//! awaited inline rather than spawned.

use handler_chain::HandlerChain;
use hbot_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling and runs every text message through `handler_chain`. Errors are logged
/// and end that message's processing; polling continues.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> anyhow::Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        async move {
            if msg.text().is_none() {
                info!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                return respond(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if let Err(e) = chain.handle(&core_msg).await {
                error!(
                    error = %e,
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Handler chain failed"
                );
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
