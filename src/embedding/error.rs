use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("embedding provider returned status {status}: {message}")]
    ProviderRejected { status: u16, message: String },

    #[error("embedding response could not be decoded: {reason}")]
    InvalidResponse { reason: String },

    #[error("embedding provider returned an empty vector")]
    EmptyEmbedding,
}

impl From<reqwest::Error> for EmbeddingError {
    fn from(err: reqwest::Error) -> Self {
        EmbeddingError::RequestFailed {
            reason: err.to_string(),
        }
    }
}

pub type EmbeddingResult<T> = Result<T, EmbeddingError>;
