//! # Hugging Face inference client
//!
//! Typed client for the hosted Inference API, text2text-generation task:
//! [`GenerationRequest`] (prompt + [`GenerationParameters`] + [`InferenceOptions`]) is sent as JSON to
//! `{base_url}/models/{model}` and the body is decoded into a [`GenerationResponse`].
//!
//! [`TextGenerator`] is the seam used by the bot runtime so tests can substitute a fake.
//!
//! ```rust,no_run
//! use hf_inference::{GenerationParameters, InferenceClient, TextGenerator};
//!
//! async fn example() -> Result<(), hf_inference::InferenceError> {
//!     let client = InferenceClient::new("hf_...".to_string());
//!     let params = GenerationParameters::new().with_temperature(0.7);
//!     let response = client
//!         .generate("Hello", "facebook/blenderbot-400M-distill", &params)
//!         .await?;
//!     println!("{:?}", response.first_text());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

mod client;
mod config;
mod error;
mod types;

pub use client::{InferenceClient, DEFAULT_INFERENCE_URL, TEXT2TEXT_GENERATION_TASK};
pub use config::{InferenceConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use error::{InferenceError, Result};
pub use types::{
    GeneratedText, GenerationParameters, GenerationRequest, GenerationResponse, InferenceOptions,
};

/// Text generation interface: one prompt in, a list of propositions out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt` with `model`. An empty prompt fails without network I/O.
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        parameters: &GenerationParameters,
    ) -> Result<GenerationResponse>;
}

/// Masks an API token for logging: first 7 chars + "***" + last 4 chars.
/// Tokens of length <= 11 become "***" so no part of a short token leaks.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}
