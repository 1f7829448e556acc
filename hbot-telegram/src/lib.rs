//! # hbot-telegram
//!
//! Telegram layer: adapters from teloxide types, the [`hbot_core::Bot`] implementation and the
//! REPL runner feeding the handler chain. No persistence or feed logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::run_repl;
