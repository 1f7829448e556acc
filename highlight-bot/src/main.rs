//! `hbot` binary: run the bot, or deliver once to every registered user.

use anyhow::Result;
use clap::Parser;
use highlight_bot::{load_config, run_bot, sync_once, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::SyncOnce { token } => {
            let config = load_config(token)?;
            let report = sync_once(config).await?;
            println!(
                "users: {}, delivered: {}, empty: {}, failed: {}",
                report.users, report.delivered, report.empty, report.failed
            );
            Ok(())
        }
    }
}
