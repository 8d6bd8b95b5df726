use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::error::{EmbeddingError, EmbeddingResult};
use crate::constants::DEFAULT_EMBEDDING_MODEL;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Turns query text into a dense vector.
///
/// Callers guarantee non-blank input (query enhancement substitutes a
/// placeholder for empty queries upstream).
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> impl std::future::Future<Output = EmbeddingResult<Vec<f32>>> + Send;
}

/// [`Embedder`] backed by the Gemini `embedContent` REST endpoint.
///
/// The API key is injected at construction and never logged or printed.
pub struct GeminiEmbedder {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiEmbedder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL, e.g. for a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for GeminiEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiEmbedder")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

impl Embedder for GeminiEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        let url = format!("{}/models/{}:embedContent", self.base_url, self.model);
        let body = json!({
            "content": { "parts": [{ "text": text }] }
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ProviderRejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbedContentResponse =
            response
                .json()
                .await
                .map_err(|err| EmbeddingError::InvalidResponse {
                    reason: err.to_string(),
                })?;

        if parsed.embedding.values.is_empty() {
            return Err(EmbeddingError::EmptyEmbedding);
        }

        debug!(
            model = %self.model,
            dim = parsed.embedding.values.len(),
            "embedded query text"
        );
        Ok(parsed.embedding.values)
    }
}
