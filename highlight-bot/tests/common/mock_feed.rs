//! Scripted [`omnivore_client::FeedClient`]: one valid token, a single page of articles.

use async_trait::async_trait;
use omnivore_client::{Article, ArticlesPage, FeedClient, FeedError, Highlight, PageInfo, Profile};
use std::sync::Mutex;

pub struct MockFeed {
    valid_token: String,
    articles: Vec<Article>,
    fail_profile: bool,
    fail_search: bool,
    profile_calls: Mutex<Vec<String>>,
    search_calls: Mutex<usize>,
}

impl MockFeed {
    pub fn new(valid_token: &str, articles: Vec<Article>) -> Self {
        Self {
            valid_token: valid_token.to_string(),
            articles,
            fail_profile: false,
            fail_search: false,
            profile_calls: Mutex::new(Vec::new()),
            search_calls: Mutex::new(0),
        }
    }

    pub fn failing_profile(mut self) -> Self {
        self.fail_profile = true;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn profile_calls(&self) -> Vec<String> {
        self.profile_calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        *self.search_calls.lock().unwrap()
    }
}

pub fn article(id: &str, title: &str, quotes: &[(&str, &[&str])]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        highlights: quotes
            .iter()
            .map(|(quote, labels)| Highlight {
                quote: quote.to_string(),
                labels: labels.iter().map(|l| l.to_string()).collect(),
            })
            .collect(),
    }
}

fn unavailable() -> FeedError {
    FeedError::Status {
        status: 503,
        body: "unavailable".to_string(),
    }
}

#[async_trait]
impl FeedClient for MockFeed {
    async fn fetch_profile(&self, credential: &str) -> Result<Option<Profile>, FeedError> {
        self.profile_calls.lock().unwrap().push(credential.to_string());
        if self.fail_profile {
            return Err(unavailable());
        }
        Ok((credential == self.valid_token).then(|| Profile {
            id: "profile-1".to_string(),
            name: Some("Ada".to_string()),
            username: Some("ada".to_string()),
        }))
    }

    async fn fetch_articles_page(
        &self,
        _credential: &str,
        _query: &str,
        _cursor: Option<&str>,
    ) -> Result<ArticlesPage, FeedError> {
        *self.search_calls.lock().unwrap() += 1;
        if self.fail_search {
            return Err(unavailable());
        }
        Ok(ArticlesPage {
            articles: self.articles.clone(),
            page_info: PageInfo {
                has_next_page: false,
                end_cursor: None,
            },
        })
    }
}
