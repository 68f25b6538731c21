//! Property tests for recap-textrank summarization.

use proptest::prelude::*;

use recap_core::constants::SCORE_SUM_TOLERANCE;
use recap_core::SummaryOptions;
use recap_textrank::summarize;

const WORDS: &[&str] = &[
    "budget", "council", "transit", "service", "routes", "hiring", "weather", "rain",
    "market", "prices", "server", "release", "review", "team", "plan", "school",
    "report", "river", "bridge", "energy", "tax", "vote", "museum", "garden",
];

/// Text of whole sentences, each three or more pool words, capitalized and
/// terminated with a period.
fn text_strategy() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(prop::collection::vec(prop::sample::select(WORDS), 3..10), 1..15)
        .prop_map(|sentences| {
            let count = sentences.len();
            let text = sentences
                .iter()
                .map(|words| {
                    let mut sentence = words.join(" ");
                    sentence[..1].make_ascii_uppercase();
                    sentence.push('.');
                    sentence
                })
                .collect::<Vec<_>>()
                .join(" ");
            (text, count)
        })
}

fn joined_chars(result: &recap_core::SummaryResult) -> usize {
    result.sentences.iter().map(|s| s.char_count).sum::<usize>()
        + result.sentences.len().saturating_sub(1)
}

// Budgets: sentence count and char length of the joined summary.
proptest! {
    #[test]
    fn prop_budgets_hold(
        (text, _) in text_strategy(),
        max_sentences in 1usize..6,
        max_chars in 20usize..400,
    ) {
        let options = SummaryOptions {
            max_sentences: Some(max_sentences),
            max_chars: Some(max_chars),
            ..Default::default()
        };
        let result = summarize(&text, &options).unwrap();
        prop_assert!(result.summary_sentence_count <= max_sentences);
        prop_assert!(result.summary_sentence_count <= result.original_sentence_count);
        prop_assert!(joined_chars(&result) <= max_chars);
    }
}

// Order: selected sentences appear in source order.
proptest! {
    #[test]
    fn prop_source_order(
        (text, _) in text_strategy(),
        max_sentences in 1usize..8,
    ) {
        let options = SummaryOptions {
            max_sentences: Some(max_sentences),
            ..Default::default()
        };
        let result = summarize(&text, &options).unwrap();
        for pair in result.sentences.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
        }
    }
}

// Counts, ratio and score mass.
proptest! {
    #[test]
    fn prop_result_shape((text, count) in text_strategy()) {
        let result = summarize(&text, &SummaryOptions::default()).unwrap();
        prop_assert_eq!(result.original_sentence_count, count);
        prop_assert_eq!(result.scores.len(), count);
        prop_assert!((0.0..=1.0).contains(&result.compression_ratio));
        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < SCORE_SUM_TOLERANCE);
    }
}

// Chunked runs keep the same budgets.
proptest! {
    #[test]
    fn prop_chunked_budgets_hold(
        (text, count) in text_strategy(),
        chunk_threshold in 40usize..300,
        max_sentences in 1usize..5,
    ) {
        let options = SummaryOptions {
            chunk_threshold: Some(chunk_threshold),
            max_sentences: Some(max_sentences),
            max_chars: Some(300),
            ..Default::default()
        };
        let result = summarize(&text, &options).unwrap();
        prop_assert!(result.summary_sentence_count <= max_sentences);
        prop_assert!(joined_chars(&result) <= 300);
        prop_assert_eq!(result.scores.len(), count);
        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < SCORE_SUM_TOLERANCE);
    }
}

// Deterministic: identical inputs give identical results.
proptest! {
    #[test]
    fn prop_deterministic((text, _) in text_strategy()) {
        let r1 = summarize(&text, &SummaryOptions::default()).unwrap();
        let r2 = summarize(&text, &SummaryOptions::default()).unwrap();
        prop_assert!(r1.same_content(&r2));
    }
}
