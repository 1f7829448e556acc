//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use handler_chain::HandlerChain;
use hbot_core::Bot;
use hbot_telegram::{build_teloxide_bot, TelegramBotAdapter};
use highlights::{ArticleDownloader, HighlightSender};
use omnivore_client::{FeedClient, OmnivoreClient};
use std::sync::Arc;
use storage::{UserRepository, UserStore};
use tracing::{error, info, instrument};

use crate::config::{BotConfig, HighlightConfig};
use crate::dialogue::DialogueStore;
use crate::handlers::{CommandHandler, LoggingHandler, RegistrationHandler};

/// Shared services for the handlers, the sync scheduler and the REPL.
#[derive(Clone)]
pub struct BotComponents {
    pub store: Arc<dyn UserStore>,
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub sender: Arc<HighlightSender>,
    pub dialogues: DialogueStore,
}

/// Builds the delivery pipeline from config around the given feed and send capability.
pub fn build_highlight_sender(
    config: &HighlightConfig,
    feed: Arc<dyn FeedClient>,
    bot: Arc<dyn Bot>,
) -> HighlightSender {
    let downloader = ArticleDownloader::with_query(feed, config.query.clone());
    HighlightSender::new(downloader, bot)
        .with_max_length(config.max_message_len)
        .with_pacing(config.pacing())
}

#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let repo = UserRepository::new(config.database_url())
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url(),
                "Failed to initialize user storage"
            );
            anyhow::anyhow!("Failed to initialize user storage: {}", e)
        })?;
    let store: Arc<dyn UserStore> = Arc::new(repo);

    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url());
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let hl = config.highlight();
    let feed: Arc<dyn FeedClient> = Arc::new(
        OmnivoreClient::with_api_url(hl.omnivore_api_url.clone()).with_page_size(hl.page_size),
    );
    info!(api_url = %hl.omnivore_api_url, page_size = hl.page_size, "Omnivore client ready");

    let sender = Arc::new(build_highlight_sender(hl, feed, bot.clone()));

    Ok(BotComponents {
        store,
        teloxide_bot,
        bot,
        sender,
        dialogues: DialogueStore::new(hl.dialogue_ttl()),
    })
}

/// Builds the handler chain (logging → registration dialogue → commands).
pub fn build_handler_chain(
    store: Arc<dyn UserStore>,
    dialogues: DialogueStore,
    sender: Arc<HighlightSender>,
    bot: Arc<dyn Bot>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new(dialogues.clone())))
        .add_handler(Arc::new(RegistrationHandler::new(
            store.clone(),
            dialogues,
            sender.clone(),
            bot.clone(),
        )))
        .add_handler(Arc::new(CommandHandler::new(store, sender, bot)))
}

impl BotComponents {
    pub fn handler_chain(&self) -> HandlerChain {
        build_handler_chain(
            self.store.clone(),
            self.dialogues.clone(),
            self.sender.clone(),
            self.bot.clone(),
        )
    }
}

