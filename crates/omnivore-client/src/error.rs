//! Feed transport errors. Every variant is a transport failure from the caller's point of view.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Decode error: {0}")]
    Decode(String),
}
