//! Splitting documents into fixed-size overlapping chunks.

use crate::document::{Chunk, Document};

/// A strategy for splitting documents into chunks.
///
/// Implementations produce [`Chunk`]s with text and provenance but no
/// embeddings; embeddings are attached later by the engine. Chunks never
/// merge content from two different documents.
pub trait Chunker: Send + Sync {
    /// Split a document into chunks.
    ///
    /// Returns an empty `Vec` if the document has empty text.
    fn chunk(&self, document: &Document) -> Vec<Chunk>;
}

/// Splits text into fixed-size windows by character count with a configured
/// overlap between consecutive windows.
///
/// Sizes are measured in Unicode scalar values, so multibyte text is never
/// split mid-character. Chunk IDs are generated as
/// `{document_id}_{chunk_index}`.
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk
    /// * `chunk_overlap` — number of characters shared between consecutive chunks
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self { chunk_size, chunk_overlap }
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, document: &Document) -> Vec<Chunk> {
        if document.text.is_empty() {
            return Vec::new();
        }

        // Byte offset of every char boundary, plus the end of the text, so
        // windows can be sliced without landing inside a multibyte char.
        let mut boundaries: Vec<usize> =
            document.text.char_indices().map(|(offset, _)| offset).collect();
        boundaries.push(document.text.len());
        let char_count = boundaries.len() - 1;

        let step = self.chunk_size.saturating_sub(self.chunk_overlap);
        let mut chunks = Vec::new();
        let mut start = 0;
        let mut chunk_index = 0;

        while start < char_count {
            let end = (start + self.chunk_size).min(char_count);
            chunks.push(Chunk {
                id: format!("{}_{chunk_index}", document.id),
                text: document.text[boundaries[start]..boundaries[end]].to_string(),
                embedding: Vec::new(),
                document_id: document.id.clone(),
                source: document.source.clone(),
                chunk_index,
            });

            chunk_index += 1;
            if end == char_count || step == 0 {
                break;
            }
            start += step;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document { id: "doc".to_string(), text: text.to_string(), source: "doc.txt".to_string() }
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        let chunker = FixedSizeChunker::new(10, 2);
        assert!(chunker.chunk(&doc("")).is_empty());
    }

    #[test]
    fn short_document_yields_one_chunk() {
        let chunker = FixedSizeChunker::new(100, 20);
        let chunks = chunker.chunk(&doc("hello"));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello");
        assert_eq!(chunks[0].id, "doc_0");
        assert_eq!(chunks[0].source, "doc.txt");
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let chunker = FixedSizeChunker::new(4, 1);
        let chunks = chunker.chunk(&doc("héllö wörld ☀️"));
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 4);
        }
    }

    #[test]
    fn zero_step_produces_a_single_chunk() {
        // overlap == size would never advance; the chunker stops after one window.
        let chunker = FixedSizeChunker::new(3, 3);
        let chunks = chunker.chunk(&doc("abcdef"));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "abc");
    }
}
