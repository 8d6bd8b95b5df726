use thiserror::Error;

/// Errors returned by the retrieval engine.
///
/// Backend and embedding failures never surface here: individual signals
/// degrade to empty result lists instead. Only an invalid request or invalid
/// tuning fails a call.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The request asked for fewer than one result.
    #[error("top_k must be at least 1 (got {top_k})")]
    InvalidTopK {
        /// Requested result count.
        top_k: usize,
    },

    /// The engine was constructed with out-of-range tuning values.
    #[error("invalid search tuning: {reason}")]
    InvalidTuning {
        /// What was out of range.
        reason: String,
    },
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;
