//! [`FeedClient`] capability and its Omnivore HTTP implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::FeedError;
use crate::graphql::{
    into_page, GraphQlRequest, GraphQlResponse, NoVariables, SearchData, SearchResult,
    SearchVariables, ViewerData, SEARCH_QUERY, VIEWER_QUERY,
};
use crate::mask_token;
use crate::types::{ArticlesPage, Profile};

pub const DEFAULT_API_URL: &str = "https://api-prod.omnivore.app/api/graphql";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Remote reading-list capability. The credential is passed per call so one client serves all users.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Profile behind `credential`; `Ok(None)` when the credential is rejected or yields no profile.
    async fn fetch_profile(&self, credential: &str) -> Result<Option<Profile>, FeedError>;

    /// One page of articles matching `query`, starting after `cursor` (None = first page).
    async fn fetch_articles_page(
        &self,
        credential: &str,
        query: &str,
        cursor: Option<&str>,
    ) -> Result<ArticlesPage, FeedError>;
}

/// Omnivore GraphQL client. Cheap to clone; shares one connection pool.
#[derive(Clone)]
pub struct OmnivoreClient {
    http: reqwest::Client,
    api_url: String,
    page_size: u32,
}

impl OmnivoreClient {
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Client for a custom endpoint (self-hosted instance or a mock server in tests).
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Posts a GraphQL document. Returns the HTTP status alongside the decoded envelope so callers
    /// can decide how to treat auth failures.
    async fn post<V, T>(
        &self,
        credential: &str,
        query: &str,
        variables: V,
    ) -> Result<(StatusCode, Option<GraphQlResponse<T>>), FeedError>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", credential)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok((status, None));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str::<GraphQlResponse<T>>(&body)
            .map_err(|e| FeedError::Decode(e.to_string()))?;
        Ok((status, Some(envelope)))
    }
}

impl Default for OmnivoreClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedClient for OmnivoreClient {
    #[instrument(skip(self, credential), fields(token = %mask_token(credential)))]
    async fn fetch_profile(&self, credential: &str) -> Result<Option<Profile>, FeedError> {
        let (status, envelope) = self
            .post::<_, ViewerData>(credential, VIEWER_QUERY, NoVariables {})
            .await?;

        let Some(envelope) = envelope else {
            info!(status = status.as_u16(), "Credential rejected");
            return Ok(None);
        };
        if !envelope.errors.is_empty() {
            let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
            warn!(errors = ?messages, "Profile query returned errors");
            return Ok(None);
        }

        Ok(envelope.data.and_then(|d| d.me).map(Profile::from))
    }

    #[instrument(skip(self, credential), fields(token = %mask_token(credential)))]
    async fn fetch_articles_page(
        &self,
        credential: &str,
        query: &str,
        cursor: Option<&str>,
    ) -> Result<ArticlesPage, FeedError> {
        let variables = SearchVariables {
            after: cursor,
            first: self.page_size,
            query,
        };
        let (status, envelope) = self
            .post::<_, SearchData>(credential, SEARCH_QUERY, variables)
            .await?;

        let envelope = envelope.ok_or_else(|| FeedError::Status {
            status: status.as_u16(),
            body: "credential rejected".to_string(),
        })?;
        if let Some(first) = envelope.errors.first() {
            return Err(FeedError::GraphQl(first.message.clone()));
        }
        let data = envelope
            .data
            .ok_or_else(|| FeedError::Decode("search response has no data".to_string()))?;

        match data.search {
            SearchResult::Success { edges, page_info } => {
                let page = into_page(edges, page_info);
                debug!(
                    articles = page.articles.len(),
                    has_next_page = page.page_info.has_next_page,
                    "Fetched articles page"
                );
                Ok(page)
            }
            SearchResult::Error { error_codes } => Err(FeedError::GraphQl(error_codes.join(","))),
        }
    }
}
