//! Prompt construction and length budgeting around the text generator.

use async_trait::async_trait;
use tracing::info;

use crate::errors::SummarizerError;

/// Approximate characters per generation token. Fixed policy constant used
/// to translate a character budget into a model token ceiling; actual
/// token/character ratios are model-dependent.
pub const CHARS_PER_TOKEN: usize = 3;

/// Remote text-generation capability: given a prompt and a token ceiling,
/// returns generated text or fails. No latency or availability guarantee.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, max_tokens: usize) -> Result<String, SummarizerError>;
}

/// Wraps a [`TextGenerator`] with prompt construction and response cleanup.
pub struct SummaryClient {
    generator: Box<dyn TextGenerator>,
}

impl SummaryClient {
    #[must_use]
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Summarizes `text` into approximately `max_length` characters.
    ///
    /// `max_length` is a generation hint passed to the model, not a hard cap
    /// on the returned string.
    ///
    /// # Errors
    ///
    /// Any transport, model, or parse failure surfaces as
    /// [`SummarizerError::Summarization`]. The content is never retried or
    /// re-chunked.
    pub async fn summarize(
        &self,
        text: &str,
        max_length: usize,
    ) -> Result<String, SummarizerError> {
        let prompt = build_prompt(text, max_length);
        let max_tokens = token_budget(max_length);

        info!(max_length, max_tokens, "Requesting summary generation");

        let generated = self.generator.generate(&prompt, max_tokens).await?;
        Ok(generated.trim().to_string())
    }
}

/// Instructs the model to summarize within the character budget. The
/// trailing `Summary:` cue anchors the completion to start the summary.
#[must_use]
pub fn build_prompt(content: &str, max_length: usize) -> String {
    format!(
        "Please provide a concise summary of the following content in approximately \
         {max_length} characters or less. Focus on the main points and key information:\
         \n\n{content}\n\nSummary:"
    )
}

/// Token ceiling for a character budget: `ceil(max_length / 3)`.
#[must_use]
pub fn token_budget(max_length: usize) -> usize {
    max_length.div_ceil(CHARS_PER_TOKEN)
}
