//! Frequency-ranked content words for tag display.

use recap_core::Language;
use rustc_hash::FxHashMap;

use super::tfidf::tokenize;

/// Most frequent non-stopword tokens across the whole text.
///
/// Ties are broken by first occurrence so the output is stable.
pub fn extract_key_phrases(text: &str, language: Language, max_phrases: usize) -> Vec<String> {
    if max_phrases == 0 {
        return Vec::new();
    }

    // term -> (count, first position)
    let mut stats: FxHashMap<String, (usize, usize)> = FxHashMap::default();
    for (position, token) in tokenize(text, language).into_iter().enumerate() {
        stats.entry(token).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = stats
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(max_phrases);
    ranked.into_iter().map(|(term, _, _)| term).collect()
}
