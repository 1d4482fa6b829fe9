//! Inference configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::client::DEFAULT_INFERENCE_URL;
use crate::types::{GenerationParameters, InferenceOptions};

/// Model used when `HF_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "facebook/blenderbot-400M-distill";

/// Sampling temperature used when `HF_TEMPERATURE` is not set. Adds some randomness to replies.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Settings for the inference variant of the bot.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// HUGGINGFACEHUB_API_TOKEN
    pub api_token: String,
    /// HF_INFERENCE_URL
    pub base_url: String,
    /// HF_MODEL
    pub model: String,
    pub parameters: GenerationParameters,
    pub options: InferenceOptions,
}

impl InferenceConfig {
    /// Loads from the environment. `HUGGINGFACEHUB_API_TOKEN` must be set and non-empty.
    ///
    /// Optional: `HF_INFERENCE_URL`, `HF_MODEL`, `HF_TEMPERATURE`, `HF_MAX_NEW_TOKENS`,
    /// `HF_WAIT_FOR_MODEL`.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("HUGGINGFACEHUB_API_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())
            .context("Missing or invalid HUGGINGFACEHUB_API_TOKEN")?;
        let base_url = env::var("HF_INFERENCE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());
        let model = env::var("HF_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match env::var("HF_TEMPERATURE") {
            Ok(s) => s
                .parse::<f64>()
                .with_context(|| format!("HF_TEMPERATURE is not a number: {}", s))?,
            Err(_) => DEFAULT_TEMPERATURE,
        };
        let mut parameters = GenerationParameters::new().with_temperature(temperature);
        if let Ok(s) = env::var("HF_MAX_NEW_TOKENS") {
            let max_new_tokens = s
                .parse::<u32>()
                .with_context(|| format!("HF_MAX_NEW_TOKENS is not an integer: {}", s))?;
            parameters = parameters.with_max_new_tokens(max_new_tokens);
        }

        let options = InferenceOptions {
            use_cache: None,
            wait_for_model: env::var("HF_WAIT_FOR_MODEL")
                .ok()
                .and_then(|s| s.parse().ok()),
        };

        Ok(Self {
            api_token,
            base_url,
            model,
            parameters,
            options,
        })
    }
}
