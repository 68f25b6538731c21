//! Engine-wide summarizer defaults.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::language::Language;
use crate::models::{SegmentationStrategy, SummaryFormat, SummaryOptions};

/// Summarizer section of `recap.toml`.
///
/// Unset fields fall through to per-call options and then to compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Language code (`en`, `es`, `fr`). Detected per text when unset.
    pub locale: Option<String>,
    pub max_sentences: Option<usize>,
    /// Default: 2000.
    pub max_chars: Option<usize>,
    /// Default: 0.85.
    pub damping_factor: Option<f64>,
    /// Default: 100.
    pub max_iterations: Option<usize>,
    /// Default: 1e-6.
    pub convergence_threshold: Option<f64>,
    /// Default: 0.7.
    pub similarity_threshold: Option<f64>,
    /// Default: true.
    pub remove_near_duplicates: Option<bool>,
    /// Default: 0.1.
    pub edge_threshold: Option<f64>,
    pub format: Option<SummaryFormat>,
    pub segmentation: Option<SegmentationStrategy>,
    /// Default: 5.
    pub min_sentence_length: Option<usize>,
    /// Default: 1000.
    pub max_sentence_length: Option<usize>,
    pub clean_whitespace: Option<bool>,
    /// Default: 8000.
    pub chunk_threshold: Option<usize>,
    /// Default: 10.
    pub max_key_phrases: Option<usize>,
}

impl SummarizerConfig {
    pub fn effective_max_key_phrases(&self) -> usize {
        self.max_key_phrases
            .unwrap_or(defaults::DEFAULT_MAX_KEY_PHRASES)
    }

    /// Engine defaults as summary options.
    pub fn to_options(&self) -> Result<SummaryOptions, ConfigError> {
        let locale = match self.locale.as_deref() {
            Some(code) => Some(Language::parse(code).ok_or_else(|| {
                ConfigError::ValidationFailed {
                    field: "summarizer.locale".to_string(),
                    message: format!("unsupported language code {code:?}"),
                }
            })?),
            None => None,
        };

        Ok(SummaryOptions {
            locale,
            max_sentences: self.max_sentences,
            max_chars: self.max_chars,
            damping_factor: self.damping_factor,
            max_iterations: self.max_iterations,
            convergence_threshold: self.convergence_threshold,
            similarity_threshold: self.similarity_threshold,
            remove_near_duplicates: self.remove_near_duplicates,
            edge_threshold: self.edge_threshold,
            format: self.format,
            segmentation: self.segmentation,
            min_sentence_length: self.min_sentence_length,
            max_sentence_length: self.max_sentence_length,
            clean_whitespace: self.clean_whitespace,
            chunk_threshold: self.chunk_threshold,
        })
    }
}
