//! Paginated retrieval of qualifying articles.

use hbot_core::{HbotError, Result};
use omnivore_client::{mask_token, Article, FeedClient};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::transport;

/// Fixed search scope: archived items.
pub const ARCHIVE_QUERY: &str = "in:archive";

/// Walks all pages of a search and keeps the articles that carry a label.
#[derive(Clone)]
pub struct ArticleDownloader {
    client: Arc<dyn FeedClient>,
    query: String,
}

impl ArticleDownloader {
    pub fn new(client: Arc<dyn FeedClient>) -> Self {
        Self::with_query(client, ARCHIVE_QUERY)
    }

    pub fn with_query(client: Arc<dyn FeedClient>, query: impl Into<String>) -> Self {
        Self {
            client,
            query: query.into(),
        }
    }

    pub fn client(&self) -> &Arc<dyn FeedClient> {
        &self.client
    }

    /// All articles qualifying for `label` across all pages, in fetch order.
    ///
    /// Fails with `Authentication` when the credential has no profile. Every page is scanned,
    /// the last one included; iteration stops when a page reports no next page or no cursor.
    /// Transport errors propagate; nothing fetched so far is returned.
    #[instrument(skip(self, credential), fields(token = %mask_token(credential)))]
    pub async fn download_articles(&self, credential: &str, label: &str) -> Result<Vec<Article>> {
        let profile = self
            .client
            .fetch_profile(credential)
            .await
            .map_err(transport)?;
        if profile.is_none() {
            return Err(HbotError::Authentication(
                "could not load profile for credential".to_string(),
            ));
        }

        let mut matched = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .client
                .fetch_articles_page(credential, &self.query, cursor.as_deref())
                .await
                .map_err(transport)?;
            pages += 1;

            let before = matched.len();
            matched.extend(page.articles.into_iter().filter(|a| a.qualifies(label)));
            debug!(page = pages, qualifying = matched.len() - before, "Scanned page");

            let next = match page.page_info.next_cursor() {
                Some(next) => next.to_string(),
                None => break,
            };
            if cursor.as_deref() == Some(next.as_str()) {
                warn!(cursor = %next, "Feed returned the same cursor twice, stopping");
                break;
            }
            cursor = Some(next);
        }

        info!(pages, qualifying = matched.len(), "Downloaded articles");
        Ok(matched)
    }
}
