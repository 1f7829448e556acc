//! Logs each message in before() and the response in after(); always continues.

use async_trait::async_trait;
use hbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

use crate::dialogue::DialogueStore;

const MASKED: &str = "<credential>";

/// Logs commands and dialogue answers; any other free text is masked, since it may be a token
/// typed after its dialogue expired.
pub struct LoggingHandler {
    dialogues: DialogueStore,
}

impl LoggingHandler {
    pub fn new(dialogues: DialogueStore) -> Self {
        Self { dialogues }
    }

    async fn logged_content<'a>(&self, message: &'a Message) -> &'a str {
        if message.command().is_some()
            || self.dialogues.expects_loggable_answer(message.user.id).await
        {
            message.content.as_str()
        } else {
            MASKED
        }
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let content = self.logged_content(message).await;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DialogueState;
    use chrono::Utc;
    use hbot_core::{Chat, User};
    use std::time::Duration;

    fn message(text: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 5,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat::private(5),
            content: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_credential_is_masked_while_awaited() {
        let dialogues = DialogueStore::default();
        dialogues.begin(5).await;
        let handler = LoggingHandler::new(dialogues);

        assert_eq!(handler.logged_content(&message("secret-token")).await, MASKED);
    }

    #[tokio::test]
    async fn test_text_after_expired_dialogue_is_masked() {
        let dialogues = DialogueStore::new(Some(Duration::from_millis(20)));
        dialogues.begin(5).await;
        let handler = LoggingHandler::new(dialogues);

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(handler.logged_content(&message("secret-token")).await, MASKED);
    }

    #[tokio::test]
    async fn test_text_outside_dialogue_is_masked() {
        let handler = LoggingHandler::new(DialogueStore::default());
        assert_eq!(handler.logged_content(&message("hello")).await, MASKED);
    }

    #[tokio::test]
    async fn test_label_and_sample_size_answers_are_logged() {
        let dialogues = DialogueStore::default();
        dialogues
            .set(
                5,
                DialogueState::AwaitingLabel {
                    credential: "tok".to_string(),
                },
            )
            .await;
        let handler = LoggingHandler::new(dialogues.clone());
        assert_eq!(handler.logged_content(&message("reading")).await, "reading");

        dialogues
            .set(
                5,
                DialogueState::AwaitingSampleSize {
                    credential: "tok".to_string(),
                    label: "reading".to_string(),
                },
            )
            .await;
        assert_eq!(handler.logged_content(&message("3")).await, "3");
    }

    #[tokio::test]
    async fn test_commands_are_logged() {
        let dialogues = DialogueStore::default();
        dialogues.begin(5).await;
        let handler = LoggingHandler::new(dialogues);

        assert_eq!(handler.logged_content(&message("/cancel")).await, "/cancel");
    }
}
