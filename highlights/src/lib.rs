//! # Highlights
//!
//! Turns a remote article feed into a bounded sequence of chat messages:
//!
//! - [`ArticleDownloader`] walks every page of the archive and keeps the articles that qualify
//!   for a label.
//! - [`sample_articles`] draws the requested number without replacement.
//! - [`render_article`] / [`pack_payloads`] turn articles into HTML payloads under the size limit.
//! - [`HighlightSender`] ties it together and sends payloads with a pacing delay.

mod downloader;
mod render;
mod sample;
mod sender;

pub use downloader::{ArticleDownloader, ARCHIVE_QUERY};
pub use render::{pack_payloads, payload_len, render_article};
pub use sample::sample_articles;
pub use sender::{HighlightSender, DEFAULT_MAX_MESSAGE_LEN, DEFAULT_PACING};

use hbot_core::HbotError;
use omnivore_client::FeedError;

/// Feed failures are transport errors for the relay.
pub(crate) fn transport(e: FeedError) -> HbotError {
    HbotError::Transport(e.to_string())
}
