//! Canned generation client for tests.

use std::sync::Mutex;

use super::client::GenerationClient;
use super::error::{GenerationError, GenerationResult};

/// [`GenerationClient`] that returns a fixed reply and records every prompt
/// it receives.
#[derive(Debug, Default)]
pub struct MockGenerationClient {
    reply: String,
    failing: bool,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerationClient {
    /// A client that answers every prompt with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            failing: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every call fails, for exercising fallback paths.
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            failing: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("mock prompt lock poisoned").clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts().pop()
    }
}

impl GenerationClient for MockGenerationClient {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        self.prompts
            .lock()
            .expect("mock prompt lock poisoned")
            .push(prompt.to_string());
        if self.failing {
            return Err(GenerationError::Provider {
                message: "mock generation configured to fail".to_string(),
            });
        }
        Ok(self.reply.clone())
    }
}
