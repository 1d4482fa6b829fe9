//! Message routing: decides what to do with one inbound message and sends at most one reply.

use std::sync::Arc;

use async_trait::async_trait;
use hf_inference::{GenerationParameters, TextGenerator};
use hfbot_core::{Bot, InboundMessage, MessageHandler};
use tracing::{error, info, instrument, warn};

use crate::commands::{handle_command, Command};

/// Threaded reply sent when the inference call fails or returns nothing.
pub const APOLOGY_REPLY: &str = "Sorry I could not handle your message, please try again later";

/// Threaded reply for messages with neither text nor photo.
pub const UNEXPECTED_MESSAGE_REPLY: &str = "Unexpected message type, message rejected";

/// Outcome of classifying a message. Rules are applied in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Route<'a> {
    /// No sender; nothing is sent.
    Rejected,
    /// Text starting with the command marker.
    Command(Command),
    /// Free text to forward to the model.
    Prompt(&'a str),
    /// Photo without text. Not supported yet; nothing is sent.
    Photo,
    /// Neither text nor photo.
    Unexpected,
}

/// Classifies a message. Shared by both routers so they agree on rejection and commands.
pub fn classify(message: &InboundMessage) -> Route<'_> {
    if message.user.is_none() {
        return Route::Rejected;
    }
    let text = message.text();
    if !text.is_empty() {
        if message.is_command() {
            Route::Command(Command::parse(text))
        } else {
            Route::Prompt(text)
        }
    } else if message.has_photo() {
        Route::Photo
    } else {
        Route::Unexpected
    }
}

/// Answers free text with the model's first proposition, as a threaded reply.
pub struct LlmRouter {
    bot: Arc<dyn Bot>,
    generator: Arc<dyn TextGenerator>,
    model: String,
    parameters: GenerationParameters,
}

impl LlmRouter {
    pub fn new(
        bot: Arc<dyn Bot>,
        generator: Arc<dyn TextGenerator>,
        model: String,
        parameters: GenerationParameters,
    ) -> Self {
        Self {
            bot,
            generator,
            model,
            parameters,
        }
    }

    /// Runs one inference call. Any failure, and an empty result list, become the apology text.
    async fn answer(&self, message: &InboundMessage, prompt: &str) -> String {
        match self
            .generator
            .generate(prompt, &self.model, &self.parameters)
            .await
        {
            Ok(response) => match response.first_text() {
                Some(text) => text.to_string(),
                None => {
                    warn!(chat_id = message.chat.id, model = %self.model, "Inference returned no results");
                    APOLOGY_REPLY.to_string()
                }
            },
            Err(e) => {
                error!(
                    error = %e,
                    chat_id = message.chat.id,
                    model = %self.model,
                    "[HuggingFace] Unexpected error"
                );
                APOLOGY_REPLY.to_string()
            }
        }
    }
}

#[async_trait]
impl MessageHandler for LlmRouter {
    #[instrument(skip(self, message), fields(message_id = message.id, chat_id = message.chat.id))]
    async fn handle_message(&self, message: &InboundMessage) {
        match classify(message) {
            Route::Rejected => {
                info!(chat_id = message.chat.id, "User is nil, message rejected");
            }
            Route::Command(command) => {
                info!(user_id = message.user_id(), message_content = %message.text(), "Received message");
                handle_command(message, &command);
            }
            Route::Prompt(prompt) => {
                info!(user_id = message.user_id(), message_content = %prompt, "Received message");
                let reply = self.answer(message, prompt).await;
                send_reply(self.bot.as_ref(), message, &reply).await;
            }
            Route::Photo => {
                info!(
                    user_id = message.user_id(),
                    photo_sizes = message.photo.len(),
                    "Handling photo message"
                );
            }
            Route::Unexpected => {
                info!(user_id = message.user_id(), "Unexpected message type, message rejected");
                send_reply(self.bot.as_ref(), message, UNEXPECTED_MESSAGE_REPLY).await;
            }
        }
    }
}

/// Copies every non-command message back into its chat. No model call.
pub struct CopyRouter {
    bot: Arc<dyn Bot>,
}

impl CopyRouter {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessageHandler for CopyRouter {
    #[instrument(skip(self, message), fields(message_id = message.id, chat_id = message.chat.id))]
    async fn handle_message(&self, message: &InboundMessage) {
        match classify(message) {
            Route::Rejected => {
                info!(chat_id = message.chat.id, "User is nil, message rejected");
            }
            Route::Command(command) => handle_command(message, &command),
            Route::Prompt(_) | Route::Photo | Route::Unexpected => {
                match self.bot.copy_message(message).await {
                    Ok(()) => info!(user_id = message.user_id(), "Copied message back"),
                    Err(e) => error!(error = %e, "[Telegram] Failed to copy message"),
                }
            }
        }
    }
}

async fn send_reply(bot: &dyn Bot, message: &InboundMessage, text: &str) {
    match bot.reply_to(message, text).await {
        Ok(()) => info!(user_id = message.user_id(), reply_len = text.len(), "Reply sent"),
        Err(e) => error!(error = %e, "[Telegram] Failed to send message"),
    }
}
