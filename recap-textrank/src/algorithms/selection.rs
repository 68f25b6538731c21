//! Budgeted greedy selection of ranked sentences.

use recap_core::config::defaults;
use recap_core::models::ResolvedOptions;
use recap_core::Sentence;
use rustc_hash::FxHashSet;

use super::similarity::{jaccard, word_set};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionParams {
    pub max_sentences: usize,
    pub max_chars: usize,
    pub remove_near_duplicates: bool,
    /// Jaccard overlap above which a candidate is a near-duplicate.
    pub similarity_threshold: f64,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            max_sentences: defaults::MAX_SENTENCES_CEILING,
            max_chars: defaults::DEFAULT_MAX_CHARS,
            remove_near_duplicates: defaults::DEFAULT_REMOVE_NEAR_DUPLICATES,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl SelectionParams {
    pub fn from_options(options: &ResolvedOptions, max_sentences: usize) -> Self {
        Self {
            max_sentences,
            max_chars: options.max_chars,
            remove_near_duplicates: options.remove_near_duplicates,
            similarity_threshold: options.similarity_threshold,
        }
    }
}

/// Pick sentences by descending score under the count and char budgets.
///
/// Returns positions into `sentences`, ascending (source order). The char
/// budget counts one separator between admitted sentences. A candidate that
/// does not fit the remaining budget, or that overlaps an already admitted
/// sentence by more than the threshold, is skipped without consuming budget
/// and is never reconsidered.
pub fn select_sentences(
    sentences: &[Sentence],
    scores: &[f64],
    params: &SelectionParams,
) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..sentences.len().min(scores.len())).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

    let mut admitted: Vec<usize> = Vec::new();
    let mut admitted_words: Vec<FxHashSet<String>> = Vec::new();
    let mut used_chars = 0usize;

    for idx in ranked {
        if admitted.len() >= params.max_sentences {
            break;
        }
        let sentence = &sentences[idx];
        let separator = usize::from(!admitted.is_empty());
        let needed = sentence.char_count + separator;
        if used_chars + needed > params.max_chars {
            continue;
        }

        let words = word_set(&sentence.text);
        if params.remove_near_duplicates
            && admitted_words
                .iter()
                .any(|seen| jaccard(&words, seen) > params.similarity_threshold)
        {
            continue;
        }

        used_chars += needed;
        admitted.push(idx);
        admitted_words.push(words);
    }

    admitted.sort_unstable();
    admitted
}
