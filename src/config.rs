//! Configuration for the chatbot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};

/// Configuration parameters for loading, retrieval, and generation.
///
/// Built once at process start and treated as read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatbotConfig {
    /// Embedding model identifier.
    pub embedding_model: String,
    /// Chat model identifier used for answer synthesis.
    pub chat_model: String,
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Number of overlapping characters between consecutive chunks.
    pub chunk_overlap: usize,
    /// Number of top results to retrieve per question.
    pub top_k: usize,
    /// Sampling temperature for answer generation.
    pub temperature: f32,
    /// Maximum number of output tokens for answer generation.
    pub max_output_tokens: u32,
    /// Optional per-request timeout for generation calls.
    pub timeout: Option<Duration>,
    /// Number of retries after a failed generation call.
    pub max_retries: u32,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            embedding_model: "gemini-embedding-001".to_string(),
            chat_model: "gemini-2.5-flash".to_string(),
            chunk_size: 512,
            chunk_overlap: 100,
            top_k: 4,
            temperature: 0.2,
            max_output_tokens: 200,
            timeout: None,
            max_retries: 2,
        }
    }
}

impl ChatbotConfig {
    /// Create a new builder for constructing a [`ChatbotConfig`].
    pub fn builder() -> ChatbotConfigBuilder {
        ChatbotConfigBuilder::default()
    }

    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables: `RAGCHAT_EMBEDDING_MODEL`, `RAGCHAT_CHAT_MODEL`,
    /// `RAGCHAT_CHUNK_SIZE`, `RAGCHAT_CHUNK_OVERLAP`, `RAGCHAT_TOP_K`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Config`] if a variable is set but unparseable,
    /// or if the resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Ok(model) = std::env::var("RAGCHAT_EMBEDDING_MODEL") {
            builder = builder.embedding_model(model);
        }
        if let Ok(model) = std::env::var("RAGCHAT_CHAT_MODEL") {
            builder = builder.chat_model(model);
        }
        if let Some(size) = parse_env("RAGCHAT_CHUNK_SIZE")? {
            builder = builder.chunk_size(size);
        }
        if let Some(overlap) = parse_env("RAGCHAT_CHUNK_OVERLAP")? {
            builder = builder.chunk_overlap(overlap);
        }
        if let Some(top_k) = parse_env("RAGCHAT_TOP_K")? {
            builder = builder.top_k(top_k);
        }

        builder.build()
    }
}

/// Read and parse an environment variable, returning `None` when unset.
fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value.parse().map(Some).map_err(|_| {
            ChatError::Config(format!("{name} has invalid value '{value}'"))
        }),
        Err(_) => Ok(None),
    }
}

/// Builder for constructing a validated [`ChatbotConfig`].
#[derive(Debug, Clone, Default)]
pub struct ChatbotConfigBuilder {
    config: ChatbotConfig,
}

impl ChatbotConfigBuilder {
    /// Set the embedding model identifier.
    pub fn embedding_model(mut self, model: impl Into<String>) -> Self {
        self.config.embedding_model = model.into();
        self
    }

    /// Set the chat model identifier.
    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.config.chat_model = model.into();
        self
    }

    /// Set the maximum chunk size in characters.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks in characters.
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Set the number of top results to retrieve per question.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the sampling temperature for answer generation.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Set the maximum number of output tokens for answer generation.
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.config.max_output_tokens = tokens;
        self
    }

    /// Set the per-request timeout for generation calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the number of retries after a failed generation call.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Build the [`ChatbotConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Config`] if:
    /// - `chunk_overlap >= chunk_size`
    /// - `top_k == 0`
    /// - a model identifier is empty
    pub fn build(self) -> Result<ChatbotConfig> {
        if self.config.chunk_overlap >= self.config.chunk_size {
            return Err(ChatError::Config(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.config.chunk_overlap, self.config.chunk_size
            )));
        }
        if self.config.top_k == 0 {
            return Err(ChatError::Config("top_k must be greater than zero".to_string()));
        }
        if self.config.embedding_model.is_empty() {
            return Err(ChatError::Config("embedding_model must not be empty".to_string()));
        }
        if self.config.chat_model.is_empty() {
            return Err(ChatError::Config("chat_model must not be empty".to_string()));
        }
        Ok(self.config)
    }
}
