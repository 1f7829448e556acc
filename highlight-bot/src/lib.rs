//! # Highlight bot
//!
//! Telegram bot that registers users through a short dialogue (Omnivore token, label, sample
//! size) and sends them random labeled highlights on request or on a schedule. Wires storage,
//! the Omnivore client and the highlight pipeline into a handler chain and runs the REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod dialogue;
pub mod handlers;
pub mod runner;
pub mod sync;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, build_highlight_sender, BotComponents};
pub use config::{BaseConfig, BotConfig, HighlightConfig};
pub use dialogue::{DialogueState, DialogueStore};
pub use handlers::{CommandHandler, LoggingHandler, RegistrationHandler};
pub use runner::{run_bot, sync_once};
pub use sync::{SyncReport, SyncScheduler};
