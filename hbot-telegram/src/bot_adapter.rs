//! Wraps teloxide::Bot and implements [`hbot_core::Bot`].

use async_trait::async_trait;
use hbot_core::{Bot as CoreBot, Chat, HbotError, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ForceReply, ParseMode};
use tracing::warn;

/// Thin wrapper around teloxide::Bot.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Builds a teloxide Bot, pointing it at `api_url` when given. An unparsable URL falls back to the
/// default API with a warning (config validation rejects it earlier in normal startup).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                warn!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

fn bot_error(e: teloxide::RequestError) -> HbotError {
    HbotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_prompt(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(ForceReply::new())
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
