//! Error types for the `ragchat` crate.

use thiserror::Error;

/// Errors that can occur while loading, indexing, or answering.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A knowledge-base directory or file could not be read.
    #[error("Loader error ({path}): {message}")]
    Loader {
        /// The path that failed to load.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred during embedding generation.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred in the similarity index.
    #[error("Index error: {0}")]
    Index(String),

    /// An error occurred during answer generation.
    #[error("Generation error ({provider}): {message}")]
    Generation {
        /// The chat model provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A console input/output error.
    #[error("Console error: {0}")]
    Console(String),
}

/// A convenience result type for chatbot operations.
pub type Result<T> = std::result::Result<T, ChatError>;
