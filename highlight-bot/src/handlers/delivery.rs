//! Runs the highlight pipeline for an interactive request and turns its outcome into a reply.

use hbot_core::{Bot, HandlerResponse, HbotError, Message, Result};
use highlights::HighlightSender;
use tracing::{error, info, warn};

use super::replies;

/// Sends highlights to the chat of `message`. "Nothing found" and transport failures are answered
/// with a reply; other errors propagate.
pub(crate) async fn deliver(
    sender: &HighlightSender,
    bot: &dyn Bot,
    message: &Message,
    credential: &str,
    label: &str,
    amount: usize,
) -> Result<HandlerResponse> {
    match sender
        .send_highlights(&message.chat, credential, label, amount)
        .await
    {
        Ok(true) => {
            info!(user_id = message.user.id, label = %label, "Highlights delivered");
            Ok(HandlerResponse::Stop)
        }
        Ok(false) => {
            let text = replies::no_highlights(label);
            bot.reply_html(message, &text).await?;
            Ok(HandlerResponse::Reply(text))
        }
        Err(HbotError::Authentication(reason)) => {
            warn!(user_id = message.user.id, reason = %reason, "Stored token rejected");
            bot.reply_to(message, replies::TOKEN_REVOKED).await?;
            Ok(HandlerResponse::Reply(replies::TOKEN_REVOKED.to_string()))
        }
        Err(e) if e.is_transport() => {
            error!(error = %e, user_id = message.user.id, label = %label, "Highlight delivery failed");
            bot.reply_to(message, replies::FETCH_FAILED).await?;
            Ok(HandlerResponse::Reply(replies::FETCH_FAILED.to_string()))
        }
        Err(e) => Err(e),
    }
}
