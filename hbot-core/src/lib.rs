//! # hbot-core
//!
//! Core types and traits for the highlight relay bot: [`Bot`] (outbound send capability),
//! [`Handler`], message and user types, errors and tracing initialization.
//! Transport-agnostic; used by handler-chain, highlights, hbot-telegram and highlight-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Command, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
