//! Caller-facing summarization options and their resolved form.
//!
//! Every field of [`SummaryOptions`] is optional; [`SummaryOptions::resolve`]
//! fills the gaps from `config::defaults` and validates what was given.
//!
//! Malformed values are handled by two fixed rules:
//! - count caps (`max_sentences`, `max_chars`, `max_iterations`,
//!   `min_sentence_length`, `max_sentence_length`, `chunk_threshold`) are
//!   clamped to a floor of 1;
//! - `damping_factor`, `similarity_threshold` and `edge_threshold` outside
//!   `[0, 1]`, and a `convergence_threshold` that is not a positive finite
//!   number, are rejected with [`SummarizeError::InvalidOption`].

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::{RecapResult, SummarizeError};
use crate::language::{detect_language, Language};

/// How the selected sentences are rendered into `SummaryResult::summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Bullets for four or more sentences, a paragraph otherwise.
    #[default]
    Auto,
    Paragraph,
    Bullets,
}

/// Which boundary detector the segmenter starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationStrategy {
    /// UAX #29 sentence boundaries, then abbreviation repair.
    #[default]
    Unicode,
    /// Terminal punctuation runs, then abbreviation repair.
    Punctuation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Declared language. Detected from the text when absent.
    pub locale: Option<Language>,
    /// Sentence cap. Derived from the text length when absent.
    pub max_sentences: Option<usize>,
    /// Budget on the selected sentences joined by single spaces. Bullet
    /// rendering adds a prefix per line on top of it.
    pub max_chars: Option<usize>,
    pub damping_factor: Option<f64>,
    pub max_iterations: Option<usize>,
    pub convergence_threshold: Option<f64>,
    /// Jaccard overlap above which a candidate counts as a near-duplicate.
    pub similarity_threshold: Option<f64>,
    pub remove_near_duplicates: Option<bool>,
    /// Cosine similarity at or below which a graph edge is dropped.
    pub edge_threshold: Option<f64>,
    pub format: Option<SummaryFormat>,
    pub segmentation: Option<SegmentationStrategy>,
    pub min_sentence_length: Option<usize>,
    pub max_sentence_length: Option<usize>,
    pub clean_whitespace: Option<bool>,
    /// Texts longer than this many chars go through the chunked driver.
    pub chunk_threshold: Option<usize>,
}

impl SummaryOptions {
    /// Returns `self` with every unset field taken from `base`.
    pub fn or(&self, base: &SummaryOptions) -> SummaryOptions {
        SummaryOptions {
            locale: self.locale.or(base.locale),
            max_sentences: self.max_sentences.or(base.max_sentences),
            max_chars: self.max_chars.or(base.max_chars),
            damping_factor: self.damping_factor.or(base.damping_factor),
            max_iterations: self.max_iterations.or(base.max_iterations),
            convergence_threshold: self.convergence_threshold.or(base.convergence_threshold),
            similarity_threshold: self.similarity_threshold.or(base.similarity_threshold),
            remove_near_duplicates: self.remove_near_duplicates.or(base.remove_near_duplicates),
            edge_threshold: self.edge_threshold.or(base.edge_threshold),
            format: self.format.or(base.format),
            segmentation: self.segmentation.or(base.segmentation),
            min_sentence_length: self.min_sentence_length.or(base.min_sentence_length),
            max_sentence_length: self.max_sentence_length.or(base.max_sentence_length),
            clean_whitespace: self.clean_whitespace.or(base.clean_whitespace),
            chunk_threshold: self.chunk_threshold.or(base.chunk_threshold),
        }
    }

    /// Validate, clamp, and fill defaults for a summarization of `text`.
    pub fn resolve(&self, text: &str) -> RecapResult<ResolvedOptions> {
        let damping_factor = unit_interval(
            "damping_factor",
            self.damping_factor.unwrap_or(defaults::DEFAULT_DAMPING_FACTOR),
        )?;
        let similarity_threshold = unit_interval(
            "similarity_threshold",
            self.similarity_threshold
                .unwrap_or(defaults::DEFAULT_SIMILARITY_THRESHOLD),
        )?;
        let edge_threshold = unit_interval(
            "edge_threshold",
            self.edge_threshold.unwrap_or(defaults::DEFAULT_EDGE_THRESHOLD),
        )?;

        let convergence_threshold = self
            .convergence_threshold
            .unwrap_or(defaults::DEFAULT_CONVERGENCE_THRESHOLD);
        if !convergence_threshold.is_finite() || convergence_threshold <= 0.0 {
            return Err(SummarizeError::invalid(
                "convergence_threshold",
                format!("must be a positive finite number, got {convergence_threshold}"),
            ));
        }

        let language = self.locale.unwrap_or_else(|| detect_language(text));
        let max_sentences = self
            .max_sentences
            .unwrap_or_else(|| default_max_sentences(text.chars().count()))
            .max(1);
        let min_sentence_length = self
            .min_sentence_length
            .unwrap_or(defaults::DEFAULT_MIN_SENTENCE_LENGTH)
            .max(1);
        let max_sentence_length = self
            .max_sentence_length
            .unwrap_or(defaults::DEFAULT_MAX_SENTENCE_LENGTH)
            .max(min_sentence_length);

        Ok(ResolvedOptions {
            language,
            max_sentences,
            max_chars: self.max_chars.unwrap_or(defaults::DEFAULT_MAX_CHARS).max(1),
            damping_factor,
            max_iterations: self
                .max_iterations
                .unwrap_or(defaults::DEFAULT_MAX_ITERATIONS)
                .max(1),
            convergence_threshold,
            similarity_threshold,
            remove_near_duplicates: self
                .remove_near_duplicates
                .unwrap_or(defaults::DEFAULT_REMOVE_NEAR_DUPLICATES),
            edge_threshold,
            format: self.format.unwrap_or_default(),
            segmentation: self.segmentation.unwrap_or_default(),
            min_sentence_length,
            max_sentence_length,
            clean_whitespace: self
                .clean_whitespace
                .unwrap_or(defaults::DEFAULT_CLEAN_WHITESPACE),
            chunk_threshold: self
                .chunk_threshold
                .unwrap_or(defaults::DEFAULT_CHUNK_THRESHOLD)
                .max(1),
        })
    }
}

/// Fully-specified options. Only produced by [`SummaryOptions::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub language: Language,
    pub max_sentences: usize,
    pub max_chars: usize,
    pub damping_factor: f64,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
    pub similarity_threshold: f64,
    pub remove_near_duplicates: bool,
    pub edge_threshold: f64,
    pub format: SummaryFormat,
    pub segmentation: SegmentationStrategy,
    pub min_sentence_length: usize,
    pub max_sentence_length: usize,
    pub clean_whitespace: bool,
    pub chunk_threshold: usize,
}

/// Sentence cap used when the caller gives none, tiered on text length in chars.
pub fn default_max_sentences(char_count: usize) -> usize {
    defaults::MAX_SENTENCES_TIERS
        .iter()
        .find(|(upper, _)| char_count < *upper)
        .map(|(_, cap)| *cap)
        .unwrap_or(defaults::MAX_SENTENCES_CEILING)
}

fn unit_interval(field: &str, value: f64) -> RecapResult<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SummarizeError::invalid(
            field,
            format!("must be between 0.0 and 1.0, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let resolved = SummaryOptions::default().resolve("Short text.").unwrap();
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.max_sentences, 3);
        assert_eq!(resolved.max_chars, defaults::DEFAULT_MAX_CHARS);
        assert_eq!(resolved.damping_factor, defaults::DEFAULT_DAMPING_FACTOR);
        assert_eq!(resolved.max_iterations, defaults::DEFAULT_MAX_ITERATIONS);
        assert!(resolved.remove_near_duplicates);
        assert_eq!(resolved.format, SummaryFormat::Auto);
        assert_eq!(resolved.chunk_threshold, defaults::DEFAULT_CHUNK_THRESHOLD);
    }

    #[test]
    fn zero_caps_are_clamped_to_one() {
        let options = SummaryOptions {
            max_sentences: Some(0),
            max_chars: Some(0),
            max_iterations: Some(0),
            ..Default::default()
        };
        let resolved = options.resolve("text").unwrap();
        assert_eq!(resolved.max_sentences, 1);
        assert_eq!(resolved.max_chars, 1);
        assert_eq!(resolved.max_iterations, 1);
    }

    #[test]
    fn max_sentence_length_never_below_min() {
        let options = SummaryOptions {
            min_sentence_length: Some(50),
            max_sentence_length: Some(10),
            ..Default::default()
        };
        let resolved = options.resolve("text").unwrap();
        assert_eq!(resolved.max_sentence_length, 50);
    }

    #[test]
    fn out_of_range_probabilities_are_rejected() {
        for options in [
            SummaryOptions {
                damping_factor: Some(1.5),
                ..Default::default()
            },
            SummaryOptions {
                similarity_threshold: Some(-0.1),
                ..Default::default()
            },
            SummaryOptions {
                edge_threshold: Some(f64::NAN),
                ..Default::default()
            },
            SummaryOptions {
                convergence_threshold: Some(0.0),
                ..Default::default()
            },
        ] {
            let err = options.resolve("text").unwrap_err();
            assert!(matches!(err, SummarizeError::InvalidOption { .. }));
        }
    }

    #[test]
    fn call_options_override_base() {
        let base = SummaryOptions {
            max_sentences: Some(8),
            max_chars: Some(500),
            ..Default::default()
        };
        let call = SummaryOptions {
            max_sentences: Some(2),
            ..Default::default()
        };
        let merged = call.or(&base);
        assert_eq!(merged.max_sentences, Some(2));
        assert_eq!(merged.max_chars, Some(500));
    }

    #[test]
    fn max_sentences_tiers() {
        assert_eq!(default_max_sentences(0), 3);
        assert_eq!(default_max_sentences(499), 3);
        assert_eq!(default_max_sentences(500), 5);
        assert_eq!(default_max_sentences(4_999), 7);
        assert_eq!(default_max_sentences(50_000), 10);
    }

    #[test]
    fn locale_is_detected_when_absent() {
        let resolved = SummaryOptions::default()
            .resolve("Le projet est terminé et les résultats sont dans le rapport.")
            .unwrap();
        assert_eq!(resolved.language, Language::Fr);
    }
}
