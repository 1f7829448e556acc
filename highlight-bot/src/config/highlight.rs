//! Highlight delivery config: Omnivore endpoint, search scope, payload limits, pacing, sync, dialogue TTL.

use anyhow::Result;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// OMNIVORE_API_URL
    pub omnivore_api_url: String,
    /// OMNIVORE_PAGE_SIZE: articles per search page
    pub page_size: u32,
    /// HIGHLIGHT_QUERY: search scope for every page request
    pub query: String,
    /// HIGHLIGHT_MAX_MESSAGE_LEN: payload size limit in UTF-16 code units
    pub max_message_len: usize,
    /// HIGHLIGHT_PACING_SECS: pause after each payload
    pub pacing_secs: u64,
    /// HIGHLIGHT_SYNC_INTERVAL_SECS: 0 disables periodic sync
    pub sync_interval_secs: u64,
    /// DIALOGUE_TTL_SECS: 0 keeps idle dialogues forever
    pub dialogue_ttl_secs: u64,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl HighlightConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            omnivore_api_url: env::var("OMNIVORE_API_URL")
                .unwrap_or_else(|_| omnivore_client::DEFAULT_API_URL.to_string()),
            page_size: env_or("OMNIVORE_PAGE_SIZE", omnivore_client::DEFAULT_PAGE_SIZE),
            query: env::var("HIGHLIGHT_QUERY")
                .unwrap_or_else(|_| highlights::ARCHIVE_QUERY.to_string()),
            max_message_len: env_or(
                "HIGHLIGHT_MAX_MESSAGE_LEN",
                highlights::DEFAULT_MAX_MESSAGE_LEN,
            ),
            pacing_secs: env_or("HIGHLIGHT_PACING_SECS", highlights::DEFAULT_PACING.as_secs()),
            sync_interval_secs: env_or("HIGHLIGHT_SYNC_INTERVAL_SECS", 0),
            dialogue_ttl_secs: env_or("DIALOGUE_TTL_SECS", 900),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.omnivore_api_url).is_err() {
            anyhow::bail!(
                "OMNIVORE_API_URL is not a valid URL: {}",
                self.omnivore_api_url
            );
        }
        if self.page_size == 0 {
            anyhow::bail!("OMNIVORE_PAGE_SIZE must be greater than 0");
        }
        if self.max_message_len == 0 {
            anyhow::bail!("HIGHLIGHT_MAX_MESSAGE_LEN must be greater than 0");
        }
        if self.query.trim().is_empty() {
            anyhow::bail!("HIGHLIGHT_QUERY must not be empty");
        }
        Ok(())
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_secs(self.pacing_secs)
    }

    /// None when periodic sync is disabled.
    pub fn sync_interval(&self) -> Option<Duration> {
        (self.sync_interval_secs > 0).then(|| Duration::from_secs(self.sync_interval_secs))
    }

    /// None when dialogues never expire.
    pub fn dialogue_ttl(&self) -> Option<Duration> {
        (self.dialogue_ttl_secs > 0).then(|| Duration::from_secs(self.dialogue_ttl_secs))
    }
}
