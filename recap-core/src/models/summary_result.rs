use serde::{Deserialize, Serialize};

use super::Sentence;
use crate::language::Language;

/// Output of one summarization call. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences, in source order.
    pub sentences: Vec<Sentence>,
    /// Rendered summary text.
    pub summary: String,
    pub original_sentence_count: usize,
    pub summary_sentence_count: usize,
    /// `summary_sentence_count / original_sentence_count`, 0 for empty input.
    pub compression_ratio: f64,
    pub processing_time_ms: f64,
    pub language: Language,
    /// One score per segmented sentence, index-aligned with the segmented list.
    pub scores: Vec<f64>,
    /// Number of chunks the text was split into (1 when not chunked, 0 when empty).
    pub chunk_count: usize,
}

impl SummaryResult {
    pub fn new(
        sentences: Vec<Sentence>,
        summary: String,
        original_sentence_count: usize,
        language: Language,
        scores: Vec<f64>,
        chunk_count: usize,
        processing_time_ms: f64,
    ) -> Self {
        let summary_sentence_count = sentences.len();
        let compression_ratio = if original_sentence_count == 0 {
            0.0
        } else {
            summary_sentence_count as f64 / original_sentence_count as f64
        };
        Self {
            sentences,
            summary,
            original_sentence_count,
            summary_sentence_count,
            compression_ratio,
            processing_time_ms,
            language,
            scores,
            chunk_count,
        }
    }

    /// Result for input with no sentences.
    pub fn empty(language: Language, processing_time_ms: f64) -> Self {
        Self::new(
            Vec::new(),
            String::new(),
            0,
            language,
            Vec::new(),
            0,
            processing_time_ms,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Equality ignoring `processing_time_ms`.
    pub fn same_content(&self, other: &SummaryResult) -> bool {
        self.sentences == other.sentences
            && self.summary == other.summary
            && self.original_sentence_count == other.original_sentence_count
            && self.summary_sentence_count == other.summary_sentence_count
            && self.compression_ratio == other.compression_ratio
            && self.language == other.language
            && self.scores == other.scores
            && self.chunk_count == other.chunk_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_zero_counts() {
        let r = SummaryResult::empty(Language::En, 0.1);
        assert_eq!(r.original_sentence_count, 0);
        assert_eq!(r.summary_sentence_count, 0);
        assert_eq!(r.compression_ratio, 0.0);
        assert!(r.is_empty());
    }

    #[test]
    fn compression_ratio_is_count_ratio() {
        let sentences = vec![Sentence::new(1, "Second one here.", 12..28)];
        let r = SummaryResult::new(
            sentences,
            "Second one here.".to_string(),
            4,
            Language::En,
            vec![0.25; 4],
            1,
            1.0,
        );
        assert_eq!(r.summary_sentence_count, 1);
        assert_eq!(r.compression_ratio, 0.25);
    }

    #[test]
    fn same_content_ignores_timing() {
        let a = SummaryResult::empty(Language::Es, 1.0);
        let b = SummaryResult::empty(Language::Es, 7.5);
        assert!(a.same_content(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_for_persistence() {
        let r = SummaryResult::empty(Language::Fr, 0.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["language"], "fr");
        assert_eq!(json["original_sentence_count"], 0);
    }
}
