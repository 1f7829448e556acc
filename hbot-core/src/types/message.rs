//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, command::Command, user::User};

/// A single inbound text message with user and chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// The slash command carried by this message, if any.
    pub fn command(&self) -> Option<Command> {
        Command::parse(&self.content)
    }

    /// Trimmed free text (what dialogue steps consume).
    pub fn text(&self) -> &str {
        self.content.trim()
    }
}
