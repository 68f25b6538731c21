//! Property tests for option resolution and language detection.

use proptest::prelude::*;

use recap_core::models::default_max_sentences;
use recap_core::{detect_language, SummaryOptions};

proptest! {
    #[test]
    fn prop_count_caps_never_zero(
        max_sentences in 0usize..50,
        max_chars in 0usize..5000,
        chunk_threshold in 0usize..20000,
    ) {
        let resolved = SummaryOptions {
            max_sentences: Some(max_sentences),
            max_chars: Some(max_chars),
            chunk_threshold: Some(chunk_threshold),
            ..Default::default()
        }
        .resolve("")
        .unwrap();
        prop_assert!(resolved.max_sentences >= 1);
        prop_assert!(resolved.max_chars >= 1);
        prop_assert!(resolved.chunk_threshold >= 1);
        prop_assert!(resolved.max_sentence_length >= resolved.min_sentence_length);
    }
}

proptest! {
    #[test]
    fn prop_probabilities_validated(value in -2.0f64..3.0) {
        let result = SummaryOptions {
            damping_factor: Some(value),
            ..Default::default()
        }
        .resolve("");
        prop_assert_eq!(result.is_ok(), (0.0..=1.0).contains(&value));
    }
}

proptest! {
    #[test]
    fn prop_default_cap_is_monotonic(a in 0usize..20000, b in 0usize..20000) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(default_max_sentences(short) <= default_max_sentences(long));
        prop_assert!((3..=10).contains(&default_max_sentences(long)));
    }
}

proptest! {
    #[test]
    fn prop_detection_total(text in "\\PC{0,200}") {
        // Any input resolves to one of the supported languages.
        let _ = detect_language(&text);
    }
}
