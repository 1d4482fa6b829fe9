//! HTTP client for the hosted inference API.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::error::{InferenceError, Result};
use crate::mask_token;
use crate::types::{
    ErrorBody, GenerationParameters, GenerationRequest, GenerationResponse, InferenceOptions,
};
use crate::TextGenerator;

/// Default host of the Hugging Face Inference API.
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

/// Task identifier sent with every generation request.
pub const TEXT2TEXT_GENERATION_TASK: &str = "text2text-generation";

/// Client for the inference API. Cheap to clone; holds the bearer token and default options.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    api_token: String,
    base_url: String,
    options: InferenceOptions,
}

impl InferenceClient {
    /// Builds a client for the default host.
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, DEFAULT_INFERENCE_URL.to_string())
    }

    /// Builds a client for another host (proxies, dedicated endpoints, tests).
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            options: InferenceOptions::default(),
        }
    }

    /// Sets the options attached to requests built by [`TextGenerator::generate`].
    pub fn with_options(mut self, options: InferenceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for a model: `{base_url}/models/{model}`.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    /// Runs text2text-generation for `request`.
    ///
    /// Fails with [`InferenceError::EmptyInputs`] or [`InferenceError::MissingModel`] before
    /// any network I/O. Otherwise sends exactly one POST; no retry.
    #[instrument(skip(self, request), fields(model = %request.model, task = TEXT2TEXT_GENERATION_TASK))]
    pub async fn text2text_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse> {
        if request.inputs.is_empty() {
            return Err(InferenceError::EmptyInputs);
        }
        if request.model.is_empty() {
            return Err(InferenceError::MissingModel);
        }

        info!(
            model = %request.model,
            inputs_len = request.inputs.len(),
            api_token = %mask_token(&self.api_token),
            "Inference request"
        );

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => err.error.into_string(),
                Err(_) => body,
            };
            warn!(status = status.as_u16(), message = %message, "Inference API returned an error");
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerationResponse = serde_json::from_str(&body)?;
        info!(results = generated.len(), "Inference response");
        Ok(generated)
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        parameters: &GenerationParameters,
    ) -> Result<GenerationResponse> {
        let request = GenerationRequest::new(prompt, model)
            .with_parameters(parameters.clone())
            .with_options(self.options);
        self.text2text_generation(&request).await
    }
}
