//! Chat model trait for synthesizing answers from rendered prompts.

use async_trait::async_trait;

use crate::error::Result;

/// A hosted chat model that turns a fully rendered prompt into answer text.
///
/// Generation parameters (temperature, output-token budget, timeout, retry
/// count) are implementation concerns configured on the concrete client.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a completion for the given prompt.
    ///
    /// An empty response is not an error; callers decide how to handle it.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
