//! Data types for documents, chunks, search results, and answers.

use serde::{Deserialize, Serialize};

/// A source document loaded from the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document (the file stem at load time).
    pub id: String,
    /// The full text content of the document.
    pub text: String,
    /// Human-readable source label (the file name at load time).
    pub source: String,
}

/// A segment of a [`Document`] with its vector embedding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique identifier for the chunk, `{document_id}_{chunk_index}`.
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// The vector embedding for this chunk's text. Empty until the engine
    /// attaches one during indexing.
    pub embedding: Vec<f32>,
    /// The ID of the parent [`Document`].
    pub document_id: String,
    /// Source label inherited from the parent document.
    pub source: String,
    /// Zero-based position of this chunk within its document.
    pub chunk_index: usize,
}

/// A retrieved [`Chunk`] paired with a relevance score.
///
/// Scores are cosine similarities: higher means more relevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// The similarity score (higher is more relevant).
    pub score: f32,
}

/// A synthesized answer together with the ranked chunks used to produce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The answer text, or the fixed fallback string when nothing usable
    /// was retrieved or generated.
    pub text: String,
    /// The retrieval results that formed the context, in rank order.
    pub sources: Vec<SearchResult>,
}
