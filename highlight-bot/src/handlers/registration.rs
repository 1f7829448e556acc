//! Registration dialogue: /start, /cancel and the free-text answers in between.
//!
//! Credential → label → sample size. The credential is checked against the Omnivore profile
//! endpoint before it is kept; the sample size must lie in 1..=10. A completed registration is
//! saved and followed by an immediate delivery.

use async_trait::async_trait;
use hbot_core::{Bot, Command, Handler, HandlerResponse, HbotError, Message, Result};
use highlights::HighlightSender;
use omnivore_client::mask_token;
use std::sync::Arc;
use storage::{SampleSize, StorageError, UserRecord, UserStore};
use tracing::{error, info, instrument, warn};

use super::{delivery::deliver, replies, storage_error};
use crate::dialogue::{DialogueState, DialogueStore};

/// Parses a sample size answer. Non-numeric or out-of-range input is a validation error.
pub fn parse_sample_size(text: &str) -> Result<SampleSize> {
    let n: i64 = text
        .trim()
        .parse()
        .map_err(|_| HbotError::Validation(format!("not a number: {:?}", text.trim())))?;
    SampleSize::new(n).ok_or_else(|| {
        HbotError::Validation(format!(
            "{} is outside [{}, {}]",
            n,
            SampleSize::MIN,
            SampleSize::MAX
        ))
    })
}

pub struct RegistrationHandler {
    store: Arc<dyn UserStore>,
    dialogues: DialogueStore,
    sender: Arc<HighlightSender>,
    bot: Arc<dyn Bot>,
}

impl RegistrationHandler {
    pub fn new(
        store: Arc<dyn UserStore>,
        dialogues: DialogueStore,
        sender: Arc<HighlightSender>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            store,
            dialogues,
            sender,
            bot,
        }
    }

    async fn reply(&self, message: &Message, text: impl Into<String>) -> Result<HandlerResponse> {
        let text = text.into();
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    async fn prompt(&self, message: &Message, text: impl Into<String>) -> Result<HandlerResponse> {
        let text = text.into();
        self.bot.send_prompt(&message.chat, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    async fn start(&self, message: &Message) -> Result<HandlerResponse> {
        let user = &message.user;
        let existing = self
            .store
            .get_by_id(&user.external_id())
            .await
            .map_err(storage_error)?;

        if existing.is_some() {
            self.dialogues.end(user.id).await;
            info!(user_id = user.id, "Already registered");
            return self
                .reply(message, replies::already_registered(user.display_name()))
                .await;
        }

        self.dialogues.begin(user.id).await;
        info!(user_id = user.id, "Registration started");
        self.prompt(message, replies::greeting(user.display_name()))
            .await
    }

    async fn cancel(&self, message: &Message) -> Result<HandlerResponse> {
        let was_active = self.dialogues.end(message.user.id).await;
        info!(user_id = message.user.id, was_active, "Registration cancelled");
        self.reply(message, replies::FAREWELL).await
    }

    async fn on_credential(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.id;
        let credential = message.text().to_string();

        let profile = match self
            .sender
            .downloader()
            .client()
            .fetch_profile(&credential)
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                error!(error = %e, user_id, token = %mask_token(&credential), "Token check failed");
                self.dialogues.end(user_id).await;
                return self.reply(message, replies::VALIDATION_UNAVAILABLE).await;
            }
        };

        match profile {
            Some(profile) => {
                info!(user_id, profile_id = %profile.id, "Token accepted");
                self.dialogues
                    .set(user_id, DialogueState::AwaitingLabel { credential })
                    .await;
                self.prompt(message, replies::LABEL_PROMPT).await
            }
            None => {
                warn!(user_id, token = %mask_token(&credential), "Token rejected");
                self.dialogues.end(user_id).await;
                self.reply(message, replies::INVALID_TOKEN).await
            }
        }
    }

    async fn on_label(&self, message: &Message, credential: String) -> Result<HandlerResponse> {
        let label = message.text();
        if label.is_empty() {
            return self.prompt(message, replies::EMPTY_LABEL).await;
        }
        self.dialogues
            .set(
                message.user.id,
                DialogueState::AwaitingSampleSize {
                    credential,
                    label: label.to_string(),
                },
            )
            .await;
        self.prompt(message, replies::SAMPLE_SIZE_PROMPT).await
    }

    async fn on_sample_size(
        &self,
        message: &Message,
        credential: String,
        label: String,
    ) -> Result<HandlerResponse> {
        let user = &message.user;
        self.dialogues.end(user.id).await;

        let amount = match parse_sample_size(message.text()) {
            Ok(amount) => amount,
            Err(e) => {
                warn!(user_id = user.id, error = %e, "Invalid sample size");
                return self.reply(message, replies::INVALID_NUMBER).await;
            }
        };

        let record = UserRecord::new(
            user.external_id(),
            user.display_name(),
            credential.as_str(),
            label.as_str(),
            amount,
        );
        match self.store.save(&record).await {
            Ok(()) => {}
            Err(StorageError::AlreadyExists(_)) => {
                return self
                    .reply(message, replies::already_registered(user.display_name()))
                    .await;
            }
            Err(e) => return Err(storage_error(e)),
        }
        info!(user_id = user.id, label = %label, amount = %amount, "User registered");

        self.bot
            .reply_to(
                message,
                &replies::summary(user.display_name(), &label, &credential, amount),
            )
            .await?;

        deliver(
            &self.sender,
            self.bot.as_ref(),
            message,
            &credential,
            &label,
            amount.get(),
        )
        .await
    }
}

#[async_trait]
impl Handler for RegistrationHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.command() {
            Some(Command::Start) => return self.start(message).await,
            Some(Command::Cancel) => return self.cancel(message).await,
            Some(_) => return Ok(HandlerResponse::Continue),
            None => {}
        }

        match self.dialogues.get(message.user.id).await {
            None => Ok(HandlerResponse::Continue),
            Some(DialogueState::AwaitingCredential) => self.on_credential(message).await,
            Some(DialogueState::AwaitingLabel { credential }) => {
                self.on_label(message, credential).await
            }
            Some(DialogueState::AwaitingSampleSize { credential, label }) => {
                self.on_sample_size(message, credential, label).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_size_accepts_range() {
        assert_eq!(parse_sample_size("1").unwrap().get(), 1);
        assert_eq!(parse_sample_size(" 10 ").unwrap().get(), 10);
    }

    #[test]
    fn test_parse_sample_size_rejects_out_of_range_and_text() {
        for input in ["0", "11", "15", "-3", "three", "2.5", ""] {
            let err = parse_sample_size(input).unwrap_err();
            assert!(matches!(err, HbotError::Validation(_)), "{input}");
        }
    }
}
