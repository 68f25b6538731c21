//! TextRankEngine: implements ISummarizer with configured defaults, plus the
//! free-function entry points it delegates to.

use std::time::Instant;

use rayon::prelude::*;
use recap_core::config::SummarizerConfig;
use recap_core::errors::{ConfigError, RecapResult};
use recap_core::language::detect_language;
use recap_core::traits::ISummarizer;
use recap_core::{Language, SummaryOptions, SummaryResult};
use tracing::{debug, info, info_span};

use crate::algorithms::key_phrases;
use crate::algorithms::sentence_splitter::{segment_sentences, SegmentOptions};
use crate::format::format_summary;
use crate::pipeline;

/// Summarize `text` with TextRank.
///
/// Empty or whitespace-only input yields an empty result, not an error.
/// Errors only when an option is out of range.
pub fn summarize(text: &str, options: &SummaryOptions) -> RecapResult<SummaryResult> {
    let started = Instant::now();
    let resolved = options.resolve(text)?;

    let span = info_span!(
        "recap.summarize",
        chars = text.len(),
        language = %resolved.language
    );
    let _guard = span.enter();

    let sentences = segment_sentences(text, &SegmentOptions::from(&resolved));
    debug!(sentence_count = sentences.len(), "segmented text");
    if sentences.is_empty() {
        return Ok(SummaryResult::empty(resolved.language, elapsed_ms(started)));
    }

    let selection = pipeline::run_pipeline(text, &sentences, &resolved);
    let summary = format_summary(&selection.selected, resolved.format);
    let result = SummaryResult::new(
        selection.selected,
        summary,
        sentences.len(),
        resolved.language,
        selection.scores,
        selection.chunk_count,
        elapsed_ms(started),
    );

    info!(
        sentence_count = result.original_sentence_count,
        selected_count = result.summary_sentence_count,
        chunk_count = result.chunk_count,
        processing_time_ms = result.processing_time_ms,
        "summarization complete"
    );
    Ok(result)
}

/// Summarize many independent texts in parallel. Results keep input order.
pub fn summarize_batch(
    texts: &[&str],
    options: &SummaryOptions,
) -> Vec<RecapResult<SummaryResult>> {
    texts
        .par_iter()
        .map(|text| summarize(text, options))
        .collect()
}

/// Key phrases with the language detected when not given.
pub fn extract_key_phrases(
    text: &str,
    language: Option<Language>,
    max_phrases: usize,
) -> Vec<String> {
    let language = language.unwrap_or_else(|| detect_language(text));
    key_phrases::extract_key_phrases(text, language, max_phrases)
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

/// Summarizer holding defaults loaded from configuration.
///
/// Per-call options win over the engine defaults field by field.
#[derive(Debug, Clone)]
pub struct TextRankEngine {
    defaults: SummaryOptions,
    max_key_phrases: usize,
}

impl TextRankEngine {
    pub fn new(config: &SummarizerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            defaults: config.to_options()?,
            max_key_phrases: config.effective_max_key_phrases(),
        })
    }

    pub fn defaults(&self) -> &SummaryOptions {
        &self.defaults
    }

    /// Configured cap used by [`TextRankEngine::default_key_phrases`].
    pub fn max_key_phrases(&self) -> usize {
        self.max_key_phrases
    }

    /// Key phrases limited to the configured count.
    pub fn default_key_phrases(&self, text: &str) -> Vec<String> {
        extract_key_phrases(text, self.defaults.locale, self.max_key_phrases)
    }
}

impl Default for TextRankEngine {
    fn default() -> Self {
        Self {
            defaults: SummaryOptions::default(),
            max_key_phrases: SummarizerConfig::default().effective_max_key_phrases(),
        }
    }
}

impl ISummarizer for TextRankEngine {
    fn summarize(&self, text: &str, options: &SummaryOptions) -> RecapResult<SummaryResult> {
        summarize(text, &options.or(&self.defaults))
    }

    fn key_phrases(
        &self,
        text: &str,
        language: Option<Language>,
        max_phrases: usize,
    ) -> Vec<String> {
        extract_key_phrases(text, language.or(self.defaults.locale), max_phrases)
    }
}
