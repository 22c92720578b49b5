//! RAG engine orchestrating the index-and-answer workflow.
//!
//! The [`RagEngine`] composes a [`Chunker`], an [`EmbeddingProvider`], a
//! [`VectorIndex`], and a [`ChatModel`]:
//!
//! - ingestion: chunk → embed → insert,
//! - answering: embed → search → render prompt → generate → fallback mapping.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::chunking::Chunker;
use crate::config::ChatbotConfig;
use crate::document::{Answer, Document, SearchResult};
use crate::embedding::EmbeddingProvider;
use crate::error::{ChatError, Result};
use crate::generation::ChatModel;
use crate::index::VectorIndex;
use crate::prompt::PromptTemplate;

/// Fixed answer returned when retrieval or generation yields nothing usable.
pub const FALLBACK_ANSWER: &str = "I could not find the answer in the provided documents.";

/// The retrieval-augmented-generation engine.
///
/// Construct one via [`RagEngine::builder()`], index the knowledge base once
/// with [`index_documents`](RagEngine::index_documents), then call
/// [`answer`](RagEngine::answer) per question.
pub struct RagEngine {
    config: ChatbotConfig,
    chunker: Arc<dyn Chunker>,
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    chat_model: Arc<dyn ChatModel>,
    template: PromptTemplate,
}

impl RagEngine {
    /// Create a new [`RagEngineBuilder`].
    pub fn builder() -> RagEngineBuilder {
        RagEngineBuilder::default()
    }

    /// Return a reference to the engine configuration.
    pub fn config(&self) -> &ChatbotConfig {
        &self.config
    }

    /// Chunk, embed, and index the given documents.
    ///
    /// Documents with empty text produce no chunks and are skipped. Returns
    /// the total number of chunks inserted.
    ///
    /// # Errors
    ///
    /// Propagates embedding and index failures; a failure leaves the index
    /// partially populated and should be treated as fatal at startup.
    pub async fn index_documents(&self, documents: &[Document]) -> Result<usize> {
        let mut total = 0;

        for document in documents {
            let mut chunks = self.chunker.chunk(document);
            if chunks.is_empty() {
                debug!(document.id = %document.id, "skipped document with no content");
                continue;
            }

            let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
            let embeddings = self.embedder.embed_batch(&texts).await.map_err(|e| {
                error!(document.id = %document.id, error = %e, "embedding failed during indexing");
                e
            })?;

            if embeddings.len() != chunks.len() {
                return Err(ChatError::Index(format!(
                    "embedding count {} does not match chunk count {} for document '{}'",
                    embeddings.len(),
                    chunks.len(),
                    document.id
                )));
            }

            for (chunk, embedding) in chunks.iter_mut().zip(embeddings) {
                chunk.embedding = embedding;
            }

            self.index.insert(&chunks).await?;
            info!(document.id = %document.id, chunk_count = chunks.len(), "indexed document");
            total += chunks.len();
        }

        info!(chunk_count = total, document_count = documents.len(), "similarity index built");
        Ok(total)
    }

    /// Embed the question and return the top-K nearest chunks, ranked.
    ///
    /// A K larger than the corpus returns everything available; an empty
    /// index returns an empty list.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<SearchResult>> {
        let embedding = self.embedder.embed(question).await.map_err(|e| {
            error!(error = %e, "question embedding failed");
            e
        })?;

        let results = self.index.search(&embedding, self.config.top_k).await?;
        debug!(result_count = results.len(), "retrieval completed");
        Ok(results)
    }

    /// Answer a question from the indexed knowledge base.
    ///
    /// With zero retrieved chunks the chat model is not called and the fixed
    /// fallback text is returned. An empty or whitespace-only model response
    /// is also mapped to the fallback text, with the retrieved sources still
    /// attached for transparency.
    ///
    /// # Errors
    ///
    /// Propagates per-question embedding and generation failures; callers
    /// are expected to report them and keep the session alive.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        let sources = self.retrieve(question).await?;

        if sources.is_empty() {
            info!("no chunks retrieved, returning fallback answer");
            return Ok(Answer { text: FALLBACK_ANSWER.to_string(), sources });
        }

        let context =
            sources.iter().map(|r| r.chunk.text.as_str()).collect::<Vec<_>>().join("\n\n");
        let prompt = self.template.render(&context, question);

        let response = self.chat_model.generate(&prompt).await.map_err(|e| {
            error!(error = %e, "answer generation failed");
            e
        })?;

        let trimmed = response.trim();
        let text = if trimmed.is_empty() {
            info!("chat model returned no text, returning fallback answer");
            FALLBACK_ANSWER.to_string()
        } else {
            trimmed.to_string()
        };

        info!(source_count = sources.len(), answer_len = text.len(), "answer generated");
        Ok(Answer { text, sources })
    }
}

/// Builder for constructing a [`RagEngine`].
///
/// All components except the prompt template are required; the template
/// defaults to the built-in assistant prompt.
#[derive(Default)]
pub struct RagEngineBuilder {
    config: Option<ChatbotConfig>,
    chunker: Option<Arc<dyn Chunker>>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    index: Option<Arc<dyn VectorIndex>>,
    chat_model: Option<Arc<dyn ChatModel>>,
    template: Option<PromptTemplate>,
}

impl RagEngineBuilder {
    /// Set the engine configuration.
    pub fn config(mut self, config: ChatbotConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the document chunker.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Set the similarity index.
    pub fn index(mut self, index: Arc<dyn VectorIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the chat model used for answer synthesis.
    pub fn chat_model(mut self, chat_model: Arc<dyn ChatModel>) -> Self {
        self.chat_model = Some(chat_model);
        self
    }

    /// Set a custom prompt template.
    pub fn template(mut self, template: PromptTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Build the [`RagEngine`], validating that all required parts are set.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Config`] if a required component is missing.
    pub fn build(self) -> Result<RagEngine> {
        let config =
            self.config.ok_or_else(|| ChatError::Config("config is required".to_string()))?;
        let chunker =
            self.chunker.ok_or_else(|| ChatError::Config("chunker is required".to_string()))?;
        let embedder = self
            .embedder
            .ok_or_else(|| ChatError::Config("embedding_provider is required".to_string()))?;
        let index =
            self.index.ok_or_else(|| ChatError::Config("index is required".to_string()))?;
        let chat_model = self
            .chat_model
            .ok_or_else(|| ChatError::Config("chat_model is required".to_string()))?;

        Ok(RagEngine {
            config,
            chunker,
            embedder,
            index,
            chat_model,
            template: self.template.unwrap_or_default(),
        })
    }
}
