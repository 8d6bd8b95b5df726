//! Grounded answer synthesis with citations.
//!
//! [`AnswerSynthesizer`] turns a query and its retrieved evidence into a
//! cited answer: it prepares a source-annotated context block, prompts the
//! generation provider to answer from that context alone, and scores the
//! result with the confidence module. Blank queries, empty evidence, and
//! provider failures each produce a deterministic fallback answer instead of
//! an error.

mod citation;
mod client;
mod error;
mod synthesizer;
mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use citation::{Citation, CitationStyle};
pub use client::{GenaiGenerationClient, GenerationClient};
pub use error::{GenerationError, GenerationResult};
pub use synthesizer::AnswerSynthesizer;
pub use types::{AnswerRequest, AnswerResult};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockGenerationClient;
