//! Verity library crate: retrieval fusion and answer-confidence scoring for
//! insurance document Q&A.
//!
//! # Public API Surface
//!
//! The crate is a library only; hosts wire it into their own binaries. The
//! exports are organized by pipeline stage:
//!
//! ## Query Side
//! - [`SearchRequest`], [`QueryIntent`], [`SearchStrategy`] - Retrieval work order
//! - [`SynonymTable`] - Insurance-domain query enhancement
//! - [`EntityFilter`] - Product scoping pushed down to the backend
//!
//! ## Retrieval
//! - [`RetrievalEngine`] - Orchestrates enhance → signals → fuse → balance
//! - [`SearchTuning`] - Fusion weights, hybrid blend, relevance floor
//! - [`FusionAccumulator`], [`balance_comparison`], [`distance_to_relevance`] -
//!   The fusion pieces, exposed for hosts that compose their own pipeline
//!
//! ## Collaborator Seams
//! - [`SearchBackend`], [`QdrantSearchBackend`] - Keyword + named-vector search
//! - [`Embedder`], [`GeminiEmbedder`] - Query embedding
//! - [`GenerationClient`], [`GenaiGenerationClient`] - Answer generation
//!
//! ## Evidence & Scoring
//! - [`EvidenceCandidate`], [`DocumentKind`], [`SignalOrigin`] - Retrieved fragments
//! - [`score_confidence`], [`ConfidenceAssessment`], [`ConfidenceTuning`] -
//!   Answer confidence and sufficiency
//! - [`AnswerSynthesizer`], [`AnswerRequest`], [`AnswerResult`], [`Citation`] -
//!   Grounded answer synthesis with citations
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - Env-backed deployment settings (`VERITY_*`)
//! - Shared defaults live in [`constants`]
//!
//! ## Test/Mock Support
//! Mock collaborators ([`MockSearchBackend`], [`MockEmbedder`],
//! [`MockGenerationClient`]) are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod answer;
pub mod confidence;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod evidence;
pub mod query;
pub mod retrieval;
pub mod vectordb;

pub use answer::{
    AnswerRequest, AnswerResult, AnswerSynthesizer, Citation, CitationStyle, GenaiGenerationClient,
    GenerationClient, GenerationError, GenerationResult,
};
#[cfg(any(test, feature = "mock"))]
pub use answer::MockGenerationClient;

pub use confidence::{ConfidenceAssessment, ConfidenceTuning, UncertaintyTier, score_confidence};

pub use config::{Config, ConfigError, DEFAULT_QDRANT_URL};

pub use constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_EMBEDDING_DIM, DEFAULT_EMBEDDING_MODEL,
    DEFAULT_GENERATION_MODEL, DEFAULT_SEARCH_LIMIT, GENERIC_QUERY_PLACEHOLDER, MAX_SEARCH_LIMIT,
    STABLE_KEY_LEN,
};

pub use embedding::{Embedder, EmbeddingError, EmbeddingResult, GeminiEmbedder};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;

pub use evidence::{DocumentKind, EvidenceCandidate, SignalOrigin};

pub use query::{EntityFilter, QueryIntent, SearchRequest, SearchStrategy, SynonymTable};

pub use retrieval::{
    FusionAccumulator, RetrievalEngine, RetrievalError, RetrievalResult, SearchTuning,
    balance_comparison, distance_to_relevance,
};

pub use vectordb::{
    BM25_MODEL, BackendHit, KEYWORD_VECTOR_NAME, QdrantSearchBackend, SearchBackend,
    SearchBackendError, VectorSpace, content_point_id,
};
#[cfg(any(test, feature = "mock"))]
pub use vectordb::{MockSearchBackend, SeedChunk};
