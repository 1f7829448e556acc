//! # Omnivore client
//!
//! [`FeedClient`] is the capability the highlight pipeline consumes: fetch the profile behind a
//! credential, and fetch one page of articles for a search query. [`OmnivoreClient`] implements it
//! over Omnivore's GraphQL HTTP API. No retries and no caching.

mod client;
mod error;
mod graphql;
mod types;

pub use client::{FeedClient, OmnivoreClient, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};
pub use error::FeedError;
pub use types::{Article, ArticlesPage, Highlight, PageInfo, Profile};

/// Masks an API token for safe logging: first 7 chars + "***" + last 4 chars.
/// Tokens of 11 chars or fewer become "***".
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
