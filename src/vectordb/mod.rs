//! Qdrant search backend.
//!
//! The chunk collection carries three named dense vector spaces per point
//! (hypothetical question, summary, content) plus a sparse BM25 vector for
//! keyword scoring. [`SearchBackend`] exposes one call per signal; fusion of
//! signals happens client-side in [`crate::retrieval`].

pub mod client;
pub mod error;
pub mod model;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use client::{BM25_MODEL, KEYWORD_VECTOR_NAME, QdrantSearchBackend, SearchBackend};
pub use error::SearchBackendError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockSearchBackend, SeedChunk};
pub use model::{BackendHit, VectorSpace, content_point_id};
