use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tracing::debug;

use super::error::{GenerationError, GenerationResult};
use crate::constants::DEFAULT_GENERATION_MODEL;

/// Text generation as an external collaborator, expressed as a trait so
/// answer synthesis can run against a mock in tests.
pub trait GenerationClient: Send + Sync {
    /// Generates the completion for one prompt.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = GenerationResult<String>> + Send;
}

/// [`GenerationClient`] backed by the multi-provider `genai` client.
///
/// Provider credentials come from the environment; `genai` resolves them
/// from the model name (`GEMINI_API_KEY` for the default Gemini model).
#[derive(Clone)]
pub struct GenaiGenerationClient {
    client: Client,
    model: String,
}

impl GenaiGenerationClient {
    pub fn new() -> Self {
        Self::with_model(DEFAULT_GENERATION_MODEL)
    }

    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for GenaiGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GenaiGenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiGenerationClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GenerationClient for GenaiGenerationClient {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|error| GenerationError::Provider {
                message: error.to_string(),
            })?;

        let text = response.first_text().unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        debug!(model = %self.model, chars = text.len(), "generated answer text");
        Ok(text)
    }
}
