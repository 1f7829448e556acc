//! Shared fixtures for highlight-bot integration tests: recording bot, scripted feed, and a
//! handler chain wired to an in-memory user store.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_feed;

use chrono::Utc;
use handler_chain::HandlerChain;
use hbot_core::{Chat, Message, User};
use highlight_bot::{build_handler_chain, build_highlight_sender, DialogueStore, HighlightConfig};
use std::sync::Arc;
use storage::{UserRepository, UserStore};

use mock_bot::RecordingBot;
use mock_feed::MockFeed;

pub const USER_ID: i64 = 4242;
pub const VALID_TOKEN: &str = "omnivore-token-0001-abcd";

pub fn highlight_config() -> HighlightConfig {
    HighlightConfig {
        omnivore_api_url: "http://localhost/api/graphql".to_string(),
        page_size: 50,
        query: "in:archive".to_string(),
        max_message_len: 4096,
        pacing_secs: 0,
        sync_interval_secs: 0,
        dialogue_ttl_secs: 0,
    }
}

pub struct Harness {
    pub chain: HandlerChain,
    pub bot: Arc<RecordingBot>,
    pub feed: Arc<MockFeed>,
    pub store: Arc<UserRepository>,
    pub dialogues: DialogueStore,
}

impl Harness {
    pub async fn new(feed: MockFeed) -> Self {
        let bot = Arc::new(RecordingBot::default());
        let feed = Arc::new(feed);
        let store = Arc::new(UserRepository::new("sqlite::memory:").await.unwrap());
        let dialogues = DialogueStore::default();
        let sender = Arc::new(build_highlight_sender(
            &highlight_config(),
            feed.clone(),
            bot.clone(),
        ));
        let chain = build_handler_chain(
            store.clone() as Arc<dyn UserStore>,
            dialogues.clone(),
            sender,
            bot.clone(),
        );
        Self {
            chain,
            bot,
            feed,
            store,
            dialogues,
        }
    }

    /// Sends `text` from the default user and returns the chain's response.
    pub async fn say(&self, text: &str) -> hbot_core::HandlerResponse {
        self.chain.handle(&message(USER_ID, text)).await.unwrap()
    }
}

pub fn message(user_id: i64, text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: Some("ada".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
        chat: Chat::private(user_id),
        content: text.to_string(),
        created_at: Utc::now(),
    }
}
