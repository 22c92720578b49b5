//! In-memory similarity index using cosine similarity.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{Chunk, SearchResult};
use crate::error::Result;

/// A nearest-neighbor index over chunk embeddings.
///
/// The index is populated once at startup and treated as read-only for the
/// rest of the session.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Insert chunks into the index. Chunks must have embeddings attached;
    /// a chunk with an already-known ID replaces the previous entry.
    async fn insert(&self, chunks: &[Chunk]) -> Result<()>;

    /// Search for the `top_k` chunks most similar to the given embedding.
    ///
    /// Results are ordered by descending similarity score. Fewer than
    /// `top_k` entries are returned when the index holds fewer chunks;
    /// an empty index yields an empty result list.
    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>>;

    /// Return the number of chunks currently held by the index.
    async fn len(&self) -> usize;
}

/// An in-memory [`VectorIndex`] using cosine similarity for search.
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    chunks: RwLock<HashMap<String, Chunk>>,
}

impl InMemoryIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorIndex for InMemoryIndex {
    async fn insert(&self, chunks: &[Chunk]) -> Result<()> {
        let mut store = self.chunks.write().await;
        for chunk in chunks {
            store.insert(chunk.id.clone(), chunk.clone());
        }
        Ok(())
    }

    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        let store = self.chunks.read().await;

        let mut scored: Vec<SearchResult> = store
            .values()
            .map(|chunk| SearchResult {
                score: cosine_similarity(&chunk.embedding, embedding),
                chunk: chunk.clone(),
            })
            .collect();

        // Ties broken by chunk ID so repeated queries over a fixed index
        // always return the same ranking.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.chunk.id.cmp(&b.chunk.id))
        });
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn len(&self) -> usize {
        self.chunks.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_similarity_of_parallel_vectors_is_one() {
        let similarity = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_similarity_of_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn cosine_similarity_of_orthogonal_vectors_is_zero() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(similarity.abs() < 1e-6);
    }
}
