//! Mock implementation of [`hbot_core::Bot`] that records every send.

use async_trait::async_trait;
use hbot_core::{Bot, Chat, HbotError, Result};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendKind {
    Text,
    Html,
    Prompt,
}

#[derive(Debug, Clone)]
pub struct Sent {
    pub chat_id: i64,
    pub kind: SendKind,
    pub text: String,
}

#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
    fail: Mutex<bool>,
}

impl RecordingBot {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|s| s.text).collect()
    }

    pub fn last(&self) -> Option<Sent> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn of_kind(&self, kind: SendKind) -> Vec<Sent> {
        self.sent().into_iter().filter(|s| s.kind == kind).collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    /// Makes every following send fail with a Bot error.
    pub fn fail_sends(&self) {
        *self.fail.lock().unwrap() = true;
    }

    fn record(&self, chat: &Chat, kind: SendKind, text: &str) -> Result<()> {
        if *self.fail.lock().unwrap() {
            return Err(HbotError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            kind,
            text: text.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, SendKind::Text, text)
    }

    async fn send_html(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, SendKind::Html, text)
    }

    async fn send_prompt(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, SendKind::Prompt, text)
    }
}
