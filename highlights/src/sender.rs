//! Delivery of sampled highlights as paced chat messages.

use hbot_core::{Bot, Chat, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::downloader::ArticleDownloader;
use crate::render::{pack_payloads, payload_len, render_article};
use crate::sample::sample_articles;

/// Telegram's maximum message length.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 4096;
/// Pause after every payload to stay under the chat platform's rate limits.
pub const DEFAULT_PACING: Duration = Duration::from_secs(2);

/// Downloads qualifying articles, samples them and sends them as HTML payloads.
#[derive(Clone)]
pub struct HighlightSender {
    downloader: ArticleDownloader,
    bot: Arc<dyn Bot>,
    max_length: usize,
    pacing: Duration,
}

impl HighlightSender {
    pub fn new(downloader: ArticleDownloader, bot: Arc<dyn Bot>) -> Self {
        Self {
            downloader,
            bot,
            max_length: DEFAULT_MAX_MESSAGE_LEN,
            pacing: DEFAULT_PACING,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn downloader(&self) -> &ArticleDownloader {
        &self.downloader
    }

    /// Sends up to `amount` randomly chosen qualifying articles to `chat`.
    ///
    /// Returns false, sending nothing, when no article qualifies. Every payload is followed by the
    /// pacing delay, the last one included. Feed and send failures propagate unretried.
    #[instrument(skip(self, credential), fields(chat_id = chat.id))]
    pub async fn send_highlights(
        &self,
        chat: &Chat,
        credential: &str,
        label: &str,
        amount: usize,
    ) -> Result<bool> {
        let articles = self.downloader.download_articles(credential, label).await?;
        if articles.is_empty() {
            info!("No qualifying articles");
            return Ok(false);
        }

        let found = articles.len();
        let selected = sample_articles(articles, amount, &mut rand::thread_rng());
        let payloads = pack_payloads(selected.iter().map(render_article), self.max_length);

        info!(
            found,
            selected = selected.len(),
            payloads = payloads.len(),
            "Sending highlights"
        );

        for payload in &payloads {
            self.bot.send_html(chat, payload).await?;
            info!(payload_len = payload_len(payload), "Payload sent");
            tokio::time::sleep(self.pacing).await;
        }

        Ok(true)
    }
}
