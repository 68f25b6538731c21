//! Split raw text into sentences for ranking.
//!
//! Boundaries come from UAX #29 (default) or from terminal punctuation runs.
//! Either way a break is undone when the fragment before it ends in a known
//! abbreviation and the fragment after it starts lowercase.

use std::ops::Range;
use std::sync::LazyLock;

use recap_core::config::defaults;
use recap_core::models::ResolvedOptions;
use recap_core::{Language, SegmentationStrategy, Sentence};
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Repeated terminal punctuation (`!!!`, `?!`, `...`).
static REPEATED_TERMINAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([.!?])[.!?]+").ok());

/// Whitespace hugging the inside of a straight double-quote pair.
static QUOTE_PADDING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""\s*([^"]*?)\s*""#).ok());

/// Characters that may trail terminal punctuation and still belong to the sentence.
const CLOSERS: &[char] = &['"', '\'', '”', '’', ')', ']', '»'];

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentOptions {
    pub language: Language,
    pub strategy: SegmentationStrategy,
    pub min_length: usize,
    pub max_length: usize,
    pub clean_whitespace: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            language: Language::En,
            strategy: SegmentationStrategy::Unicode,
            min_length: defaults::DEFAULT_MIN_SENTENCE_LENGTH,
            max_length: defaults::DEFAULT_MAX_SENTENCE_LENGTH,
            clean_whitespace: defaults::DEFAULT_CLEAN_WHITESPACE,
        }
    }
}

impl From<&ResolvedOptions> for SegmentOptions {
    fn from(options: &ResolvedOptions) -> Self {
        Self {
            language: options.language,
            strategy: options.segmentation,
            min_length: options.min_sentence_length,
            max_length: options.max_sentence_length,
            clean_whitespace: options.clean_whitespace,
        }
    }
}

/// Split `text` into sentence strings.
pub fn segment(text: &str, options: &SegmentOptions) -> Vec<String> {
    segment_sentences(text, options)
        .into_iter()
        .map(|s| s.text)
        .collect()
}

/// Split `text` into [`Sentence`]s carrying their source byte spans.
///
/// Sentences outside `[min_length, max_length]` chars are dropped, except
/// that a text consisting of a single sentence keeps it whatever its length.
pub fn segment_sentences(text: &str, options: &SegmentOptions) -> Vec<Sentence> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let raw = match options.strategy {
        SegmentationStrategy::Unicode => unicode_spans(text),
        SegmentationStrategy::Punctuation => punctuation_spans(text, options.language),
    };
    let spans = merge_abbreviations(text, raw, options.language);

    let candidates: Vec<(Range<usize>, String)> = spans
        .into_iter()
        .filter_map(|span| {
            let span = trim_span(text, span)?;
            let cleaned = clean_sentence(&text[span.clone()], options.clean_whitespace);
            (!cleaned.is_empty()).then_some((span, cleaned))
        })
        .collect();

    let lone = candidates.len() == 1;
    candidates
        .into_iter()
        .filter(|(_, cleaned)| {
            let len = cleaned.chars().count();
            lone || (len >= options.min_length && len <= options.max_length)
        })
        .enumerate()
        .map(|(index, (span, cleaned))| Sentence::new(index, cleaned, span))
        .collect()
}

fn unicode_spans(text: &str) -> Vec<Range<usize>> {
    text.split_sentence_bound_indices()
        .map(|(start, s)| start..start + s.len())
        .collect()
}

/// Break after every `[.!?]+` run (plus trailing closers) that is followed by
/// whitespace or the end of text. Spanish also breaks before `¡` and `¿`.
fn punctuation_spans(text: &str, language: Language) -> Vec<Range<usize>> {
    let opening = language.opening_marks();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if opening.contains(&c) {
            if !text[start..i].trim().is_empty() {
                spans.push(start..i);
                start = i;
            }
            continue;
        }
        if !is_terminal(c) {
            continue;
        }

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminal(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        while let Some(&(j, next)) = chars.peek() {
            if !CLOSERS.contains(&next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }

        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            spans.push(start..end);
            start = end;
        }
    }

    if start < text.len() {
        spans.push(start..text.len());
    }
    spans
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Re-join breaks that follow an abbreviation and precede a lowercase word.
fn merge_abbreviations(
    text: &str,
    spans: Vec<Range<usize>>,
    language: Language,
) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        if let Some(prev) = merged.last_mut() {
            if ends_with_abbreviation(&text[prev.clone()], language)
                && starts_lowercase(&text[span.clone()])
            {
                prev.end = span.end;
                continue;
            }
        }
        merged.push(span);
    }
    merged
}

fn ends_with_abbreviation(fragment: &str, language: Language) -> bool {
    let trimmed = fragment.trim_end();
    if !trimmed.ends_with('.') {
        return false;
    }
    let word = trimmed
        .trim_end_matches('.')
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    !word.is_empty() && language.is_abbreviation(&word)
}

fn starts_lowercase(fragment: &str) -> bool {
    fragment
        .trim_start()
        .chars()
        .next()
        .is_some_and(char::is_lowercase)
}

fn trim_span(text: &str, span: Range<usize>) -> Option<Range<usize>> {
    let raw = &text[span.clone()];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let start = span.start + (raw.len() - raw.trim_start().len());
    Some(start..start + trimmed.len())
}

fn clean_sentence(raw: &str, clean: bool) -> String {
    if !clean {
        return raw.trim().to_string();
    }
    let mut cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Some(re) = REPEATED_TERMINAL.as_ref() {
        cleaned = re.replace_all(&cleaned, "$1").into_owned();
    }
    if let Some(re) = QUOTE_PADDING.as_ref() {
        cleaned = re.replace_all(&cleaned, "\"$1\"").into_owned();
    }
    cleaned
}
