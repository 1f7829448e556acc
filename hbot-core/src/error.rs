//! Error types for the bot core.
//!
//! [`HbotError`] is the top-level error. `Authentication` and `Validation` are user-facing and get
//! turned into guidance at the conversation boundary; `Transport` covers any failure of the remote
//! feed or of the chat transport and is never recovered locally.

use thiserror::Error;

/// Top-level error for the relay (auth, validation, transport, database, chat send).
#[derive(Error, Debug)]
pub enum HbotError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Bot error: {0}")]
    Bot(String),
}

impl HbotError {
    /// True when the remote feed or the chat transport failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, HbotError::Transport(_) | HbotError::Bot(_))
    }
}

/// Result type for core operations; uses [`HbotError`].
pub type Result<T> = std::result::Result<T, HbotError>;
