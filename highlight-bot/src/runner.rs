//! Entry points: long-running bot and one-shot sync.

use anyhow::Result;
use hbot_core::init_tracing;
use hbot_telegram::run_repl;
use omnivore_client::mask_token;
use tracing::{info, instrument};

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::sync::{SyncReport, SyncScheduler};

/// Main entry: validate config, init logging, build components, start background tasks, run REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        token = %mask_token(config.bot_token()),
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = components.handler_chain();

    if let Some(period) = config.highlight().sync_interval() {
        let scheduler = SyncScheduler::new(components.store.clone(), components.sender.clone());
        tokio::spawn(scheduler.run(period));
    }

    if let Some(ttl) = config.highlight().dialogue_ttl() {
        let dialogues = components.dialogues.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(ttl);
            loop {
                ticker.tick().await;
                dialogues.purge_expired().await;
            }
        });
    }

    info!("Bot started successfully");

    run_repl(components.teloxide_bot.clone(), handler_chain).await
}

/// One delivery pass over all registered users, then return.
#[instrument(skip(config))]
pub async fn sync_once(config: BotConfig) -> Result<SyncReport> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let components = build_bot_components(&config).await?;
    let scheduler = SyncScheduler::new(components.store, components.sender);
    let report = scheduler.run_once().await?;
    Ok(report)
}
