//! End-to-end engine tests with mock embedding and chat backends.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ragchat::{
    ChatError, ChatModel, ChatbotConfig, Document, EmbeddingProvider, FALLBACK_ANSWER,
    FixedSizeChunker, InMemoryIndex, RagEngine,
};

/// Deterministic hash-based embeddings, so retrieval is reproducible
/// without any API keys.
struct MockEmbedder {
    dimensions: usize,
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn embed(&self, text: &str) -> ragchat::Result<Vec<f32>> {
        let hash = text.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
        let mut emb = vec![0.0f32; self.dimensions];
        for (i, v) in emb.iter_mut().enumerate() {
            *v = ((hash.wrapping_add(i as u64)) as f32).sin();
        }
        let norm: f32 = emb.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            emb.iter_mut().for_each(|x| *x /= norm);
        }
        Ok(emb)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Returns a fixed reply and counts how often it was invoked.
struct MockChat {
    reply: String,
    calls: AtomicUsize,
}

impl MockChat {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self { reply: reply.to_string(), calls: AtomicUsize::new(0) })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for MockChat {
    async fn generate(&self, _prompt: &str) -> ragchat::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Always fails, like an exhausted retry budget.
struct FailingChat;

#[async_trait]
impl ChatModel for FailingChat {
    async fn generate(&self, _prompt: &str) -> ragchat::Result<String> {
        Err(ChatError::Generation {
            provider: "Mock".to_string(),
            message: "service unavailable".to_string(),
        })
    }
}

fn doc(id: &str, text: &str) -> Document {
    Document { id: id.to_string(), text: text.to_string(), source: format!("{id}.txt") }
}

fn engine_with(chat_model: Arc<dyn ChatModel>, top_k: usize) -> RagEngine {
    let config = ChatbotConfig::builder().chunk_size(64).chunk_overlap(16).top_k(top_k).build().unwrap();
    RagEngine::builder()
        .chunker(Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)))
        .embedding_provider(Arc::new(MockEmbedder { dimensions: 32 }))
        .index(Arc::new(InMemoryIndex::new()))
        .chat_model(chat_model)
        .config(config)
        .build()
        .unwrap()
}

#[tokio::test]
async fn sky_is_blue_scenario() {
    let chat = MockChat::new("The sky is blue.");
    let engine = engine_with(chat.clone(), 4);

    let indexed = engine.index_documents(&[doc("sky", "The sky is blue.")]).await.unwrap();
    assert_eq!(indexed, 1);

    let answer = engine.answer("What color is the sky?").await.unwrap();
    assert!(answer.text.contains("blue"));
    assert_eq!(answer.sources.len(), 1);
    assert_eq!(answer.sources[0].chunk.source, "sky.txt");
    assert_eq!(chat.call_count(), 1);
}

#[tokio::test]
async fn empty_index_yields_fallback_without_calling_the_model() {
    let chat = MockChat::new("should never be used");
    let engine = engine_with(chat.clone(), 4);

    let answer = engine.answer("anything at all?").await.unwrap();
    assert_eq!(answer.text, FALLBACK_ANSWER);
    assert!(answer.sources.is_empty());
    assert_eq!(chat.call_count(), 0);
}

#[tokio::test]
async fn whitespace_model_output_maps_to_fallback() {
    let chat = MockChat::new("  \n\t  ");
    let engine = engine_with(chat.clone(), 4);
    engine.index_documents(&[doc("facts", "Water boils at 100 degrees Celsius.")]).await.unwrap();

    let answer = engine.answer("When does water boil?").await.unwrap();
    assert_eq!(answer.text, FALLBACK_ANSWER);
    // The retrieved sources are still reported for transparency.
    assert!(!answer.sources.is_empty());
    assert_eq!(chat.call_count(), 1);
}

#[tokio::test]
async fn answers_are_trimmed() {
    let chat = MockChat::new("  a concise answer \n");
    let engine = engine_with(chat.clone(), 4);
    engine.index_documents(&[doc("facts", "Some indexed content.")]).await.unwrap();

    let answer = engine.answer("question?").await.unwrap();
    assert_eq!(answer.text, "a concise answer");
}

#[tokio::test]
async fn top_k_beyond_corpus_returns_everything() {
    let chat = MockChat::new("ok");
    let engine = engine_with(chat.clone(), 50);

    let indexed = engine
        .index_documents(&[doc("a", "Short document one."), doc("b", "Short document two.")])
        .await
        .unwrap();
    assert_eq!(indexed, 2);

    let results = engine.retrieve("short document").await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn retrieval_is_deterministic_for_a_fixed_index() {
    let chat = MockChat::new("ok");
    let engine = engine_with(chat.clone(), 3);
    engine
        .index_documents(&[
            doc("a", "The capital of France is Paris."),
            doc("b", "Mount Everest is the tallest mountain."),
            doc("c", "Honey never spoils when stored sealed."),
        ])
        .await
        .unwrap();

    let first = engine.retrieve("tallest mountain on earth").await.unwrap();
    let second = engine.retrieve("tallest mountain on earth").await.unwrap();

    let first_ids: Vec<&str> = first.iter().map(|r| r.chunk.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|r| r.chunk.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn generation_failures_are_propagated() {
    let engine = engine_with(Arc::new(FailingChat), 4);
    engine.index_documents(&[doc("facts", "Some indexed content.")]).await.unwrap();

    let err = engine.answer("question?").await;
    assert!(matches!(err, Err(ChatError::Generation { .. })));
}

#[tokio::test]
async fn empty_documents_are_skipped() {
    let chat = MockChat::new("ok");
    let engine = engine_with(chat.clone(), 4);

    let indexed = engine.index_documents(&[doc("empty", "")]).await.unwrap();
    assert_eq!(indexed, 0);

    // With nothing indexed, any question falls back without a model call.
    let answer = engine.answer("anything?").await.unwrap();
    assert_eq!(answer.text, FALLBACK_ANSWER);
    assert_eq!(chat.call_count(), 0);
}

#[tokio::test]
async fn builder_rejects_missing_components() {
    let result = RagEngine::builder().build();
    assert!(matches!(result, Err(ChatError::Config(_))));
}
