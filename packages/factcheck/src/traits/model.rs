//! Generative-text collaborator trait.

use async_trait::async_trait;

use crate::error::ModelResult;

/// Single-shot generative completion.
///
/// Implementations wrap a specific LLM provider and carry no
/// conversation state between calls. The pipeline uses one
/// implementation for claim extraction, verification, and report
/// generation.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> ModelResult<String>;
}
