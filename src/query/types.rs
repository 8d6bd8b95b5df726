use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::vectordb::VectorSpace;

/// Caller-classified intent of a query.
///
/// Only [`QueryIntent::Comparison`] changes retrieval behavior (it arms the
/// per-entity balancing pass); the remaining variants are carried through for
/// callers that route on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryIntent {
    /// Question about a single product.
    Product,
    /// Question comparing two or more products.
    Comparison,
    /// Purchase or application inquiry.
    Purchase,
    /// General insurance question not tied to a product.
    General,
    /// Small talk, no retrieval value.
    Chitchat,
}

/// How retrieval signals are collected and fused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Keyword signal fused with the content vector space. The default.
    Hybrid,
    /// All vector spaces queried concurrently and fused by per-space weight.
    MultiVector,
    /// A single vector space, unweighted.
    SingleSpace(VectorSpace),
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::Hybrid
    }
}

/// One retrieval work order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw query text; enhancement happens inside the engine.
    pub query: String,
    /// Entity labels scoping the search. Empty means unrestricted. The same
    /// labels drive query enhancement, filtering, and comparison balancing.
    pub entities: Vec<String>,
    /// Caller-classified intent.
    pub intent: QueryIntent,
    /// Signal collection mode.
    pub strategy: SearchStrategy,
    /// Number of evidence candidates requested. Must be at least 1; values
    /// above the crate-wide cap are clamped.
    pub top_k: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, intent: QueryIntent) -> Self {
        Self {
            query: query.into(),
            entities: Vec::new(),
            intent,
            strategy: SearchStrategy::default(),
            top_k: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn entities(mut self, entities: Vec<String>) -> Self {
        self.entities = entities;
        self
    }

    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}
