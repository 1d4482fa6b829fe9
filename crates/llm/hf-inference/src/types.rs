//! Wire types for the text2text-generation task.

use serde::{Deserialize, Serialize};

/// Optional tuning knobs. Absent fields are not sent, so the provider's defaults apply.
///
/// Ranges are documented by the provider and are not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Number of top tokens considered when sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Nucleus sampling: tokens are added from most to least probable until their
    /// probabilities sum past `top_p`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// 0.0 to 100.0. 1.0 is regular sampling, 0.0 behaves like `top_k = 1`,
    /// 100.0 approaches uniform probability. Provider default is 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// 0.0 to 100.0. Penalizes tokens already used in the generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,

    /// 0 to 250. Rough size of the generated text, prompt excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,

    /// 0 to 120 seconds. Soft limit on how long the query may take.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<f64>,

    /// When false the results do not repeat the prompt. Provider default is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_full_text: Option<bool>,

    /// Number of propositions returned. Provider default is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_return_sequences: Option<u32>,
}

impl GenerationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_repetition_penalty(mut self, penalty: f64) -> Self {
        self.repetition_penalty = Some(penalty);
        self
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = Some(max_new_tokens);
        self
    }

    pub fn with_max_time(mut self, seconds: f64) -> Self {
        self.max_time = Some(seconds);
        self
    }

    pub fn with_return_full_text(mut self, return_full_text: bool) -> Self {
        self.return_full_text = Some(return_full_text);
        self
    }

    pub fn with_num_return_sequences(mut self, n: u32) -> Self {
        self.num_return_sequences = Some(n);
        self
    }
}

/// Request options understood by the hosted inference API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceOptions {
    /// Whether the provider may answer from its own cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cache: Option<bool>,

    /// Wait for a cold model to load instead of failing with 503.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_model: Option<bool>,
}

/// A text2text-generation request. `model` selects the endpoint and is not part of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
    pub options: InferenceOptions,
    #[serde(skip)]
    pub model: String,
}

impl GenerationRequest {
    pub fn new(inputs: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: GenerationParameters::default(),
            options: InferenceOptions::default(),
            model: model.into(),
        }
    }

    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_options(mut self, options: InferenceOptions) -> Self {
        self.options = options;
        self
    }
}

/// One generated proposition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: String,
}

/// Ordered list of propositions. An empty list is a valid response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationResponse(pub Vec<GeneratedText>);

impl GenerationResponse {
    /// Text of the first proposition, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.0.first().map(|g| g.generated_text.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedText> {
        self.0.iter()
    }
}

impl From<Vec<GeneratedText>> for GenerationResponse {
    fn from(items: Vec<GeneratedText>) -> Self {
        Self(items)
    }
}

/// Error body returned by the provider on failure: `{"error": "..."}` or `{"error": ["...", ...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub(crate) fn into_string(self) -> String {
        match self {
            ErrorMessage::Single(s) => s,
            ErrorMessage::Many(v) => v.join("; "),
        }
    }
}
