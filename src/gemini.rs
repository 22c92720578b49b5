//! Gemini REST clients for embeddings and answer generation.
//!
//! Both clients talk to the Generative Language API directly over `reqwest`
//! with API-key auth. [`GeminiEmbedder`] implements [`EmbeddingProvider`]
//! via `embedContent` / `batchEmbedContents`; [`GeminiChat`] implements
//! [`ChatModel`] via `generateContent` with a configurable retry budget.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::embedding::EmbeddingProvider;
use crate::error::{ChatError, Result};
use crate::generation::ChatModel;

/// The default Generative Language API base URL.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// The default embedding model.
const DEFAULT_EMBEDDING_MODEL: &str = "gemini-embedding-001";

/// The default dimensionality for `gemini-embedding-001`.
const DEFAULT_DIMENSIONS: usize = 3072;

/// The default chat model.
const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Delay before the first retry; doubled on each subsequent retry.
const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct EmbedContentRequest<'a> {
    content: Content<'a>,
}

#[derive(Serialize)]
struct BatchEmbedRequest<'a> {
    requests: Vec<BatchEmbedEntry<'a>>,
}

#[derive(Serialize)]
struct BatchEmbedEntry<'a> {
    model: String,
    content: Content<'a>,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct BatchEmbedResponse {
    embeddings: Vec<EmbeddingValues>,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Extract a human-readable message from an API error body.
async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail =
        serde_json::from_str::<ErrorResponse>(&body).map(|e| e.error.message).unwrap_or(body);
    format!("API returned {status}: {detail}")
}

// ── Embedding client ───────────────────────────────────────────────

/// An [`EmbeddingProvider`] backed by the Gemini embeddings API.
///
/// # Configuration
///
/// - `model` – defaults to `gemini-embedding-001`.
/// - `api_key` – from the constructor or the `GEMINI_API_KEY` environment
///   variable.
pub struct GeminiEmbedder {
    client: reqwest::Client,
    api_key: String,
    model: String,
    dimensions: usize,
    base_url: String,
}

impl GeminiEmbedder {
    /// Create a new embedder with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ChatError::Embedding {
                provider: "Gemini".into(),
                message: "API key must not be empty".into(),
            });
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_EMBEDDING_MODEL.into(),
            dimensions: DEFAULT_DIMENSIONS,
            base_url: GEMINI_BASE_URL.into(),
        })
    }

    /// Create a new embedder using the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| ChatError::Embedding {
            provider: "Gemini".into(),
            message: format!("{API_KEY_ENV} environment variable not set"),
        })?;
        Self::new(api_key)
    }

    /// Set the embedding model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn embedding_error(&self, message: impl Into<String>) -> ChatError {
        ChatError::Embedding { provider: "Gemini".into(), message: message.into() }
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(provider = "Gemini", text_len = text.len(), "embedding single text");

        let url = format!("{}/models/{}:embedContent", self.base_url, self.model);
        let request = EmbedContentRequest { content: Content { parts: vec![Part { text }] } };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Gemini", error = %e, "embedding request failed");
                self.embedding_error(format!("request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            error!(provider = "Gemini", "embedding API error: {detail}");
            return Err(self.embedding_error(detail));
        }

        let body: EmbedContentResponse = response
            .json()
            .await
            .map_err(|e| self.embedding_error(format!("failed to parse response: {e}")))?;

        Ok(body.embedding.values)
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(provider = "Gemini", batch_size = texts.len(), model = %self.model, "embedding batch");

        let url = format!("{}/models/{}:batchEmbedContents", self.base_url, self.model);
        let request = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|text| BatchEmbedEntry {
                    model: format!("models/{}", self.model),
                    content: Content { parts: vec![Part { text }] },
                })
                .collect(),
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Gemini", error = %e, "batch embedding request failed");
                self.embedding_error(format!("request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            error!(provider = "Gemini", "batch embedding API error: {detail}");
            return Err(self.embedding_error(detail));
        }

        let body: BatchEmbedResponse = response
            .json()
            .await
            .map_err(|e| self.embedding_error(format!("failed to parse response: {e}")))?;

        Ok(body.embeddings.into_iter().map(|e| e.values).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

// ── Chat client ────────────────────────────────────────────────────

/// A [`ChatModel`] backed by the Gemini `generateContent` API.
///
/// Transient failures (network errors, HTTP 429 and 5xx) are retried up to
/// `max_retries` times with doubling delays; other API errors fail
/// immediately.
pub struct GeminiChat {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    max_retries: u32,
    timeout: Option<Duration>,
    base_url: String,
}

impl GeminiChat {
    /// Create a new chat client with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ChatError::Generation {
                provider: "Gemini".into(),
                message: "API key must not be empty".into(),
            });
        }
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_CHAT_MODEL.into(),
            temperature: 0.2,
            max_output_tokens: 200,
            max_retries: 2,
            timeout: None,
            base_url: GEMINI_BASE_URL.into(),
        })
    }

    /// Create a new chat client using the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| ChatError::Generation {
            provider: "Gemini".into(),
            message: format!("{API_KEY_ENV} environment variable not set"),
        })?;
        Self::new(api_key)
    }

    /// Set the chat model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of output tokens.
    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    /// Set the retry budget for transient failures.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn generation_error(&self, message: impl Into<String>) -> ChatError {
        ChatError::Generation { provider: "Gemini".into(), message: message.into() }
    }

    /// Perform one `generateContent` call.
    ///
    /// `Err(true)` marks a retryable failure, `Err(false)` a permanent one.
    async fn attempt(
        &self,
        request: &GenerateContentRequest<'_>,
    ) -> std::result::Result<String, (bool, ChatError)> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let mut builder =
            self.client.post(&url).header("x-goog-api-key", &self.api_key).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| (true, self.generation_error(format!("request failed: {e}"))))?;

        let status = response.status();
        if !status.is_success() {
            let retryable = status.as_u16() == 429 || status.is_server_error();
            let detail = error_detail(response).await;
            return Err((retryable, self.generation_error(detail)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| (false, self.generation_error(format!("failed to parse response: {e}"))))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<Vec<_>>().join(""))
            .unwrap_or_default();

        Ok(text)
    }
}

#[async_trait]
impl ChatModel for GeminiChat {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(provider = "Gemini", model = %self.model, prompt_len = prompt.len(), "generating answer");

        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let mut delay = RETRY_BASE_DELAY;
        let mut attempt = 0;
        loop {
            match self.attempt(&request).await {
                Ok(text) => return Ok(text),
                Err((retryable, err)) => {
                    if !retryable || attempt >= self.max_retries {
                        error!(provider = "Gemini", error = %err, "generation failed");
                        return Err(err);
                    }
                    warn!(
                        provider = "Gemini",
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        error = %err,
                        "generation failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
            }
        }
    }
}
