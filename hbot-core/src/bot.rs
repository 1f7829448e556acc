//! Outbound send capability.
//!
//! [`Bot`] is transport-agnostic; hbot-telegram implements it via teloxide and tests substitute
//! recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Sends text to a chat. `send_html` is the formatted variant (HTML parse mode on Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a message whose body is HTML-formatted.
    async fn send_html(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a question that expects a free-text answer (Telegram shows a reply box).
    async fn send_prompt(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_message(chat, text).await
    }

    /// Replies in the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Formatted reply in the chat the message came from.
    async fn reply_html(&self, message: &Message, text: &str) -> Result<()> {
        self.send_html(&message.chat, text).await
    }
}
