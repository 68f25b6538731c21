use crate::errors::RecapResult;
use crate::language::Language;
use crate::models::{SummaryOptions, SummaryResult};

/// Extractive summarization of a single document.
pub trait ISummarizer: Send + Sync {
    /// Summarize `text`. Unset options fall back to the implementation's defaults.
    fn summarize(&self, text: &str, options: &SummaryOptions) -> RecapResult<SummaryResult>;

    /// Most frequent content words of `text`, for tag display.
    /// The language is detected when `language` is `None`.
    fn key_phrases(&self, text: &str, language: Option<Language>, max_phrases: usize)
        -> Vec<String>;
}
