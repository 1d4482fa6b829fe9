//! Errors returned by the inference client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    /// The prompt was empty; no request was sent.
    #[error("inputs are required")]
    EmptyInputs,

    /// The model id was empty; no request was sent.
    #[error("model is required")]
    MissingModel,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the inference endpoint.
    #[error("Inference API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode inference response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl InferenceError {
    /// True for errors raised before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, InferenceError::EmptyInputs | InferenceError::MissingModel)
    }
}

pub type Result<T> = std::result::Result<T, InferenceError>;
