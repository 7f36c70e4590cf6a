//! Gemini implementation of the `GenerativeModel` trait.

use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiError};

use crate::error::{ModelError, ModelResult};
use crate::traits::GenerativeModel;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini-backed generative model.
#[derive(Clone)]
pub struct GeminiModel {
    client: GeminiClient,
    model: String,
}

impl GeminiModel {
    /// Wrap a client with the default model.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> ModelResult<Self> {
        let client = GeminiClient::from_env().map_err(map_error)?;
        Ok(Self::new(client))
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> ModelResult<String> {
        self.client
            .generate_content(&self.model, prompt)
            .await
            .map_err(map_error)
    }
}

fn map_error(e: GeminiError) -> ModelError {
    match e {
        GeminiError::Config(msg) => ModelError::Config(msg),
        GeminiError::Network(msg) => ModelError::Network(msg),
        GeminiError::Api(msg) => ModelError::Api(msg),
        GeminiError::Parse(_) => ModelError::Empty,
    }
}
