//! Estimate Generator — pluggable boundary between handlers and the LLM.
//!
//! Default: `LlmClient` (chat completion, fixed model and temperature).
//! `AppState` holds an `Arc<dyn EstimateGenerator>` so tests can swap in a canned one.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::estimation::prompts::build_prompt;
use crate::llm_client::{LlmClient, LlmError};

/// Turns a finished prompt into the generated estimate text.
#[async_trait]
pub trait EstimateGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl EstimateGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.complete(prompt).await
    }
}

/// Builds the prompt from scope and feedback and runs it through `generator`.
///
/// Every call rebuilds the full prompt; no conversation history is kept.
pub async fn generate_estimate(
    generator: &dyn EstimateGenerator,
    scope_text: &str,
    feedback: Option<&str>,
) -> Result<String, AppError> {
    let prompt = build_prompt(scope_text, feedback);
    let estimate = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Estimate generation failed: {e}")))?;
    debug!("Generated estimate: {} chars", estimate.len());
    Ok(estimate)
}
