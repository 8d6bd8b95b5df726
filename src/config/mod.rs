//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `VERITY_*` environment variables.
//! The Gemini API key is the only secret and is never baked into the crate: it
//! is read from the environment on demand and redacted from `Debug` output.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_EMBEDDING_MODEL, DEFAULT_GENERATION_MODEL,
};

/// Default Qdrant gRPC endpoint used when `VERITY_QDRANT_URL` is not set.
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

/// Deployment configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERITY_*` overrides on top of defaults.
/// Algorithm tunables are deliberately not here; they live in the injected
/// [`SearchTuning`](crate::retrieval::SearchTuning) and
/// [`ConfidenceTuning`](crate::confidence::ConfidenceTuning) structs.
#[derive(Clone)]
pub struct Config {
    /// Qdrant endpoint URL. Default: `http://localhost:6334`.
    pub qdrant_url: String,

    /// Qdrant collection holding the ingested document chunks.
    pub collection_name: String,

    /// Gemini API key, when provided via the environment. `None` is valid:
    /// the mock collaborators need no key.
    pub gemini_api_key: Option<String>,

    /// Embedding model identifier for query embedding.
    pub embedding_model: String,

    /// Text-generation model identifier for answer synthesis.
    pub generation_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            qdrant_url: DEFAULT_QDRANT_URL.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            gemini_api_key: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("qdrant_url", &self.qdrant_url)
            .field("collection_name", &self.collection_name)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("embedding_model", &self.embedding_model)
            .field("generation_model", &self.generation_model)
            .finish()
    }
}

impl Config {
    const ENV_QDRANT_URL: &'static str = "VERITY_QDRANT_URL";
    const ENV_COLLECTION: &'static str = "VERITY_COLLECTION";
    const ENV_GEMINI_API_KEY: &'static str = "VERITY_GEMINI_API_KEY";
    const ENV_EMBEDDING_MODEL: &'static str = "VERITY_EMBEDDING_MODEL";
    const ENV_GENERATION_MODEL: &'static str = "VERITY_GENERATION_MODEL";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            qdrant_url: Self::parse_string_from_env(Self::ENV_QDRANT_URL, defaults.qdrant_url),
            collection_name: Self::parse_string_from_env(
                Self::ENV_COLLECTION,
                defaults.collection_name,
            ),
            gemini_api_key: Self::parse_optional_string_from_env(Self::ENV_GEMINI_API_KEY),
            embedding_model: Self::parse_string_from_env(
                Self::ENV_EMBEDDING_MODEL,
                defaults.embedding_model,
            ),
            generation_model: Self::parse_string_from_env(
                Self::ENV_GENERATION_MODEL,
                defaults.generation_model,
            ),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates basic invariants (does not contact Qdrant).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.qdrant_url.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_QDRANT_URL,
            });
        }

        if !self.qdrant_url.starts_with("http://") && !self.qdrant_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl {
                value: self.qdrant_url.clone(),
            });
        }

        if self.collection_name.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_COLLECTION,
            });
        }

        if self.embedding_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_EMBEDDING_MODEL,
            });
        }

        if self.generation_model.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                name: Self::ENV_GENERATION_MODEL,
            });
        }

        Ok(())
    }

    /// Returns the Gemini API key or fails with [`ConfigError::MissingEnvVar`].
    ///
    /// Call this when constructing the live Gemini collaborators; mock-backed
    /// setups never need it.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.gemini_api_key
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_GEMINI_API_KEY,
            })
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
