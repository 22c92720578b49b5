//! Interactive console chat loop.
//!
//! The loop is strictly synchronous: each question is answered fully before
//! the next prompt is shown. Per-question failures are reported and the
//! session continues; only the exit keyword (or end of input) terminates it.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::error;

use crate::document::Answer;
use crate::engine::RagEngine;
use crate::error::{ChatError, Result};

/// Case-insensitive keyword that ends the session.
const EXIT_KEYWORD: &str = "exit";

/// Maximum snippet length (in chars) shown per source in the transparency block.
const SNIPPET_CHARS: usize = 80;

/// Classification of one console input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank or whitespace-only line; the user is reprompted.
    Empty,
    /// The exit keyword; the session terminates.
    Exit,
    /// A question to answer, trimmed of surrounding whitespace.
    Question(String),
}

/// Classify a raw input line.
///
/// The exit keyword matches case-insensitively against the whole trimmed
/// line, so a question merely containing the word "exit" is still answered.
pub fn classify_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Input::Empty
    } else if trimmed.eq_ignore_ascii_case(EXIT_KEYWORD) {
        Input::Exit
    } else {
        Input::Question(trimmed.to_string())
    }
}

/// An interactive chat session over a built [`RagEngine`].
pub struct ChatSession {
    engine: RagEngine,
    show_sources: bool,
}

impl ChatSession {
    /// Create a session over the given engine.
    pub fn new(engine: RagEngine) -> Self {
        Self { engine, show_sources: false }
    }

    /// Print the ranked sources and similarity scores after each answer.
    pub fn with_show_sources(mut self, show_sources: bool) -> Self {
        self.show_sources = show_sources;
        self
    }

    /// Run the read-answer-print loop until the user exits.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Console`] only for line-editor failures;
    /// answering errors are reported inline and never end the session.
    pub async fn run(&self) -> Result<()> {
        let mut editor =
            DefaultEditor::new().map_err(|e| ChatError::Console(e.to_string()))?;

        println!("Welcome to the chatbot! Type 'exit' to end the chat.\n");

        loop {
            let line = match editor.readline("You: ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    return Ok(());
                }
                Err(e) => return Err(ChatError::Console(e.to_string())),
            };

            match classify_input(&line) {
                Input::Empty => println!("AI: Please ask a valid question.\n"),
                Input::Exit => {
                    println!("Goodbye!");
                    return Ok(());
                }
                Input::Question(question) => {
                    let _ = editor.add_history_entry(&question);
                    match self.engine.answer(&question).await {
                        Ok(answer) => self.report(&answer),
                        Err(e) => {
                            error!(error = %e, "failed to answer question");
                            println!("AI: Sorry, something went wrong while answering: {e}\n");
                        }
                    }
                }
            }
        }
    }

    /// Print the answer plus the optional source-transparency block.
    fn report(&self, answer: &Answer) {
        println!("AI: {}\n", answer.text);

        if self.show_sources && !answer.sources.is_empty() {
            println!("Sources:");
            for (rank, result) in answer.sources.iter().enumerate() {
                let snippet: String =
                    result.chunk.text.chars().take(SNIPPET_CHARS).collect();
                println!(
                    "  {}. [score={:.4}] {} | {}",
                    rank + 1,
                    result.score,
                    result.chunk.source,
                    snippet.replace('\n', " "),
                );
            }
            println!();
        }
    }
}
