//! Query embedding.
//!
//! Retrieval embeds the enhanced query once per call and reuses the vector
//! across every vector space, so the [`Embedder`] seam is deliberately small:
//! one text in, one vector out.

mod client;
mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use client::{Embedder, GeminiEmbedder};
pub use error::{EmbeddingError, EmbeddingResult};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
