//! Test doubles shared by the bot-runtime integration tests.
//!
//! [`MockBot`] records every outbound call; [`FakeGenerator`] records prompts and returns a
//! scripted result. Neither touches the network. [`LogCapture`] collects log output.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use hf_inference::{
    GeneratedText, GenerationParameters, GenerationResponse, InferenceError, TextGenerator,
};
use hfbot_core::{Bot, Chat, HfbotError, InboundMessage, PhotoSize, Result, User};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Reply { chat_id: i64, reply_to: i32, text: String },
    Copy { chat_id: i64, message_id: i32 },
}

/// Mock Bot that records calls. With `failing`, every call is recorded and then fails.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    failing: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, call: Sent) -> Result<()> {
        self.sent.lock().unwrap().push(call);
        if self.failing {
            Err(HfbotError::Bot("Bad Request: chat not found".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn reply_to(&self, message: &InboundMessage, text: &str) -> Result<()> {
        self.record(Sent::Reply {
            chat_id: message.chat.id,
            reply_to: message.id,
            text: text.to_string(),
        })
    }

    async fn copy_message(&self, message: &InboundMessage) -> Result<()> {
        self.record(Sent::Copy {
            chat_id: message.chat.id,
            message_id: message.id,
        })
    }
}

/// Scripted generator: records `(prompt, model, parameters)` and returns texts or an API error.
pub struct FakeGenerator {
    calls: Mutex<Vec<(String, String, GenerationParameters)>>,
    outcome: Option<Vec<String>>,
}

impl FakeGenerator {
    /// Succeeds with one proposition per text.
    pub fn replying(texts: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Some(texts.iter().map(|t| t.to_string()).collect()),
        }
    }

    /// Fails every call with a 503 from the provider.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: None,
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(p, _, _)| p.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<(String, String, GenerationParameters)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        parameters: &GenerationParameters,
    ) -> hf_inference::Result<GenerationResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), model.to_string(), parameters.clone()));
        match &self.outcome {
            Some(texts) => Ok(GenerationResponse(
                texts
                    .iter()
                    .map(|t| GeneratedText {
                        generated_text: t.clone(),
                    })
                    .collect(),
            )),
            None => Err(InferenceError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
        }
    }
}

pub const CHAT_ID: i64 = 456;
pub const USER_ID: i64 = 123;

pub fn user() -> User {
    User {
        id: USER_ID,
        is_bot: false,
        username: Some("user".to_string()),
        first_name: Some("User".to_string()),
        last_name: None,
    }
}

/// Builds an inbound message in [`CHAT_ID`] from [`USER_ID`] (or from nobody).
pub fn make_message(id: i32, text: Option<&str>, photos: usize, with_sender: bool) -> InboundMessage {
    InboundMessage {
        id,
        user: with_sender.then(user),
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        text: text.map(String::from),
        photo: (0..photos)
            .map(|i| PhotoSize {
                file_id: format!("img{}", i + 1),
                file_unique_id: format!("uniq{}", i + 1),
                width: 320,
                height: 240,
            })
            .collect(),
        created_at: Utc::now(),
    }
}

/// Formatted log output of a thread-local subscriber. Pair with a current-thread runtime.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Installs a DEBUG-level subscriber for this thread until the guard is dropped.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        (capture, tracing::subscriber::set_default(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Number of lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(needle)).count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
