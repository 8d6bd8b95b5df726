//! Deterministic in-memory embedder for tests.

use super::client::Embedder;
use super::error::{EmbeddingError, EmbeddingResult};

const DEFAULT_MOCK_DIM: usize = 16;

/// [`Embedder`] that derives a stable pseudo-vector from a BLAKE3 digest of
/// the input text. Same text, same vector; no network.
#[derive(Debug, Clone)]
pub struct MockEmbedder {
    dim: usize,
    failing: bool,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            dim: DEFAULT_MOCK_DIM,
            failing: false,
        }
    }

    pub fn with_dim(dim: usize) -> Self {
        Self { dim, failing: false }
    }

    /// An embedder whose every call fails, for exercising degradation paths.
    pub fn failing() -> Self {
        Self {
            dim: DEFAULT_MOCK_DIM,
            failing: true,
        }
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        if self.failing {
            return Err(EmbeddingError::RequestFailed {
                reason: "mock embedder configured to fail".to_string(),
            });
        }
        let digest = blake3::hash(text.as_bytes());
        let bytes = digest.as_bytes();
        Ok((0..self.dim).map(|i| f32::from(bytes[i % 32]) / 255.0).collect())
    }
}
