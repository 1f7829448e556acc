//! /delete, /highlights, /help and unknown commands. Free text is left alone.

use async_trait::async_trait;
use hbot_core::{Bot, Command, Handler, HandlerResponse, Message, Result};
use highlights::HighlightSender;
use std::sync::Arc;
use storage::UserStore;
use tracing::{info, instrument};

use super::{delivery::deliver, replies, storage_error};

pub struct CommandHandler {
    store: Arc<dyn UserStore>,
    sender: Arc<HighlightSender>,
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(store: Arc<dyn UserStore>, sender: Arc<HighlightSender>, bot: Arc<dyn Bot>) -> Self {
        Self { store, sender, bot }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    async fn delete(&self, message: &Message) -> Result<HandlerResponse> {
        let user = &message.user;
        let deleted = self
            .store
            .delete_by_id(&user.external_id())
            .await
            .map_err(storage_error)?;
        info!(user_id = user.id, deleted, "Delete requested");

        let text = if deleted {
            replies::deleted(user.display_name())
        } else {
            replies::not_registered(user.display_name())
        };
        self.reply(message, text).await
    }

    async fn highlights(&self, message: &Message) -> Result<HandlerResponse> {
        let user = &message.user;
        let record = self
            .store
            .get_by_id(&user.external_id())
            .await
            .map_err(storage_error)?;

        match record {
            None => {
                info!(user_id = user.id, "Highlights requested by unregistered user");
                self.reply(message, replies::not_registered(user.display_name()))
                    .await
            }
            Some(record) => {
                deliver(
                    &self.sender,
                    self.bot.as_ref(),
                    message,
                    &record.credential,
                    &record.label,
                    record.sample_size.get(),
                )
                .await
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.command() {
            Some(Command::Delete) => self.delete(message).await,
            Some(Command::Highlights) => self.highlights(message).await,
            Some(Command::Help) => self.reply(message, replies::help(message.user.display_name())).await,
            Some(Command::Other(name)) => {
                info!(command = %name, "Unknown command");
                self.reply(message, replies::help(message.user.display_name())).await
            }
            Some(Command::Start | Command::Cancel) | None => Ok(HandlerResponse::Ignore),
        }
    }
}
