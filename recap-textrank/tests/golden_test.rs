//! Golden summary cases from test-fixtures/golden/summaries.

use recap_core::SummaryOptions;
use recap_textrank::summarize;
use test_fixtures::{load_golden_cases, GoldenSummaryCase};

fn run_case(case: &GoldenSummaryCase) {
    let options: SummaryOptions = if case.options.is_null() {
        SummaryOptions::default()
    } else {
        serde_json::from_value(case.options.clone())
            .unwrap_or_else(|e| panic!("{}: bad options: {e}", case.name))
    };
    let result = summarize(&case.text, &options)
        .unwrap_or_else(|e| panic!("{}: summarize failed: {e}", case.name));
    let expected = &case.expected;

    if let Some(summary) = &expected.summary {
        assert_eq!(&result.summary, summary, "{}: summary", case.name);
    }
    if let Some(sentences) = &expected.sentences {
        let actual: Vec<&str> = result.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(&actual, sentences, "{}: sentences", case.name);
    }
    if let Some(count) = expected.original_sentence_count {
        assert_eq!(
            result.original_sentence_count, count,
            "{}: original_sentence_count",
            case.name
        );
    }
    if let Some(language) = &expected.language {
        assert_eq!(result.language.code(), language, "{}: language", case.name);
    }
    if let Some(chunks) = expected.chunk_count {
        assert_eq!(result.chunk_count, chunks, "{}: chunk_count", case.name);
    }
}

#[test]
fn golden_summaries_match() {
    let cases = load_golden_cases();
    assert!(!cases.is_empty(), "no golden summary cases found");
    for case in &cases {
        run_case(case);
    }
}
