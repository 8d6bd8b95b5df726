use thiserror::Error;

/// Failures from the text-generation provider.
///
/// The synthesizer never propagates these to its caller; a failed generation
/// becomes the apologetic fallback answer with zero confidence.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider rejected or failed the request.
    #[error("generation provider error: {message}")]
    Provider {
        /// Provider-reported failure detail.
        message: String,
    },

    /// The provider replied without any text content.
    #[error("generation provider returned an empty response")]
    EmptyResponse,
}

pub type GenerationResult<T> = Result<T, GenerationError>;
