//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.
//! Algorithm tunables (fusion weights, thresholds) live in the per-module
//! tuning structs, not here; these are the fixed identity/limit values the
//! whole crate agrees on.

/// Number of leading characters of chunk content used as the deduplication
/// identity during fusion. Two hits whose first `STABLE_KEY_LEN` characters
/// match are treated as the same underlying fragment.
pub const STABLE_KEY_LEN: usize = 100;

/// Default Qdrant collection holding the ingested document chunks.
pub const DEFAULT_COLLECTION_NAME: &str = "insurance_document_chunks";

/// Default number of evidence candidates returned per retrieval call.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Hard cap on `top_k`; requests above this are clamped.
pub const MAX_SEARCH_LIMIT: usize = 20;

/// Dimension of the embedding vectors produced by the default embedding model.
pub const DEFAULT_EMBEDDING_DIM: usize = 3072;

/// Default embedding model identifier.
pub const DEFAULT_EMBEDDING_MODEL: &str = "gemini-embedding-001";

/// Default text-generation model identifier.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Substitute query text used when an incoming query is empty or whitespace,
/// so downstream embedding never receives blank input.
pub const GENERIC_QUERY_PLACEHOLDER: &str = "general insurance information";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_within_max() {
        assert!(DEFAULT_SEARCH_LIMIT >= 1);
        assert!(DEFAULT_SEARCH_LIMIT <= MAX_SEARCH_LIMIT);
    }

    #[test]
    fn test_stable_key_len_positive() {
        assert!(STABLE_KEY_LEN > 0);
    }
}
