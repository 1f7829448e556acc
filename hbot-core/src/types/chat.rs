//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat (private or group) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    /// Private chat with a user; on Telegram the chat id equals the user id.
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: "private".to_string(),
        }
    }
}
