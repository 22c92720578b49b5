//! Retrieval-augmented chatbot over a local plain-text knowledge base.
//!
//! The crate loads `*.txt` documents from a directory, splits them into
//! overlapping fixed-size chunks, embeds each chunk via the Gemini
//! embeddings API, and holds the vectors in an in-memory cosine-similarity
//! index. Questions are answered by retrieving the top-K nearest chunks and
//! prompting the Gemini chat API with a fixed context-plus-question
//! template.
//!
//! The main pieces:
//!
//! - [`loader::load_directory`] — knowledge-base loading
//! - [`FixedSizeChunker`] — character-window chunking with overlap
//! - [`GeminiEmbedder`] / [`GeminiChat`] — hosted embedding and chat clients
//! - [`InMemoryIndex`] — cosine-similarity nearest-neighbor search
//! - [`RagEngine`] — the index-and-answer orchestrator
//! - [`ChatSession`] — the interactive console loop
//!
//! The provider seams ([`EmbeddingProvider`], [`ChatModel`],
//! [`VectorIndex`], [`Chunker`]) are traits, so tests and alternative
//! backends can swap in their own implementations.

pub mod chat;
pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod gemini;
pub mod generation;
pub mod index;
pub mod loader;
pub mod prompt;

pub use chat::{ChatSession, Input, classify_input};
pub use chunking::{Chunker, FixedSizeChunker};
pub use config::ChatbotConfig;
pub use document::{Answer, Chunk, Document, SearchResult};
pub use embedding::EmbeddingProvider;
pub use engine::{FALLBACK_ANSWER, RagEngine, RagEngineBuilder};
pub use error::{ChatError, Result};
pub use gemini::{GeminiChat, GeminiEmbedder};
pub use generation::ChatModel;
pub use index::{InMemoryIndex, VectorIndex};
pub use loader::load_directory;
pub use prompt::PromptTemplate;
