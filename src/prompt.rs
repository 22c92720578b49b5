//! Prompt template with context and question placeholders.

use crate::error::{ChatError, Result};

/// Placeholder replaced by the retrieved context block.
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

/// Placeholder replaced by the user's question.
pub const QUESTION_PLACEHOLDER: &str = "{question}";

const DEFAULT_TEMPLATE: &str = "\
You are a helpful assistant that answers questions based on documents.
Use the context below to provide a clear and informative answer. If the
context does not contain the answer, say so.

Context:
{context}

Question: {question}

Respond in a concise and informative manner.";

/// A fixed prompt template with `{context}` and `{question}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template from the given text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Config`] if either placeholder is missing.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        for placeholder in [CONTEXT_PLACEHOLDER, QUESTION_PLACEHOLDER] {
            if !template.contains(placeholder) {
                return Err(ChatError::Config(format!(
                    "prompt template is missing the {placeholder} placeholder"
                )));
            }
        }
        Ok(Self { template })
    }

    /// Substitute the context block and question into the template.
    pub fn render(&self, context: &str, question: &str) -> String {
        self.template
            .replace(CONTEXT_PLACEHOLDER, context)
            .replace(QUESTION_PLACEHOLDER, question)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        // The built-in template always carries both placeholders.
        Self { template: DEFAULT_TEMPLATE.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_both_placeholders() {
        let template = PromptTemplate::new("C: {context} Q: {question}").unwrap();
        assert_eq!(template.render("facts", "why?"), "C: facts Q: why?");
    }

    #[test]
    fn missing_placeholder_is_rejected() {
        assert!(matches!(PromptTemplate::new("no placeholders"), Err(ChatError::Config(_))));
        assert!(matches!(PromptTemplate::new("only {context}"), Err(ChatError::Config(_))));
    }

    #[test]
    fn default_template_renders() {
        let rendered = PromptTemplate::default().render("the sky is blue", "what color?");
        assert!(rendered.contains("the sky is blue"));
        assert!(rendered.contains("what color?"));
    }
}
