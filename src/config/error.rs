//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration value resolved to an empty string.
    #[error("configuration value for {name} is empty")]
    EmptyValue { name: &'static str },

    /// Qdrant endpoint URL does not carry an http(s) scheme.
    #[error("invalid Qdrant URL '{value}': expected an http:// or https:// scheme")]
    InvalidUrl { value: String },

    /// A required environment variable was not set.
    ///
    /// Only the Gemini API key is required, and only once a caller constructs
    /// the live Gemini collaborators via [`Config::require_api_key`]. Loading
    /// and validating configuration without the key stays possible so the
    /// mock-backed paths run with no environment at all.
    ///
    /// [`Config::require_api_key`]: super::Config::require_api_key
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },
}
