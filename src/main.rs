//! Console entry point: load the knowledge base, build the index, chat.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use ragchat::{
    ChatSession, ChatbotConfig, FixedSizeChunker, GeminiChat, GeminiEmbedder, InMemoryIndex,
    RagEngine, load_directory,
};

#[derive(Parser)]
#[command(name = "ragchat", about = "Retrieval-augmented chatbot over a plain-text knowledge base")]
struct Args {
    /// Directory containing the *.txt knowledge-base files.
    #[arg(long, default_value = "knowledge_base")]
    kb_dir: PathBuf,

    /// Print retrieved sources and similarity scores with each answer.
    #[arg(long)]
    show_sources: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = ChatbotConfig::from_env()?;

    let embedder = GeminiEmbedder::from_env()?.with_model(&config.embedding_model);
    let mut chat_model = GeminiChat::from_env()?
        .with_model(&config.chat_model)
        .with_temperature(config.temperature)
        .with_max_output_tokens(config.max_output_tokens)
        .with_max_retries(config.max_retries);
    if let Some(timeout) = config.timeout {
        chat_model = chat_model.with_timeout(timeout);
    }

    let documents = load_directory(&args.kb_dir)
        .with_context(|| format!("failed to load knowledge base from {}", args.kb_dir.display()))?;

    let engine = RagEngine::builder()
        .chunker(Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)))
        .embedding_provider(Arc::new(embedder))
        .index(Arc::new(InMemoryIndex::new()))
        .chat_model(Arc::new(chat_model))
        .config(config)
        .build()?;

    engine
        .index_documents(&documents)
        .await
        .context("failed to build the similarity index")?;

    ChatSession::new(engine).with_show_sources(args.show_sources).run().await?;
    Ok(())
}
