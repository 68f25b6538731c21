//! Long-text driver: summarize sentence-aligned chunks independently, then
//! reduce the concatenated chunk summaries if they are still over budget.

use std::ops::Range;

use recap_core::models::ResolvedOptions;
use recap_core::Sentence;
use tracing::debug;

use super::{rank_sentences, Selection};
use crate::algorithms::selection::{select_sentences, SelectionParams};

/// Group consecutive sentences into chunks whose source span is at most
/// `threshold` chars. A sentence is never split; one longer than the
/// threshold forms its own chunk.
pub fn chunk_ranges(text: &str, sentences: &[Sentence], threshold: usize) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut chunk_chars = 0;

    for (i, sentence) in sentences.iter().enumerate() {
        if i == start {
            chunk_chars = text[sentence.span()].chars().count();
            continue;
        }
        let added = text[sentences[i - 1].end..sentence.end].chars().count();
        if chunk_chars + added > threshold {
            chunks.push(start..i);
            start = i;
            chunk_chars = text[sentence.span()].chars().count();
        } else {
            chunk_chars += added;
        }
    }

    if start < sentences.len() {
        chunks.push(start..sentences.len());
    }
    chunks
}

/// Chunked summarization.
///
/// Each chunk gets `ceil(max_sentences / chunks)` sentences. Chunk scores
/// are weighted by `chunk_len / total` so the combined vector still sums to
/// one. The reduction pass re-ranks the surviving sentences with the same
/// options, near-duplicate suppression included.
pub fn summarize_chunked(
    text: &str,
    sentences: &[Sentence],
    options: &ResolvedOptions,
) -> Selection {
    let chunks = chunk_ranges(text, sentences, options.chunk_threshold);
    let per_chunk = options.max_sentences.div_ceil(chunks.len().max(1));
    let total = sentences.len() as f64;

    let mut scores = Vec::with_capacity(sentences.len());
    let mut survivors: Vec<Sentence> = Vec::new();
    for (chunk_index, range) in chunks.iter().enumerate() {
        let chunk = &sentences[range.clone()];
        let ranking = rank_sentences(chunk, options);
        let params = SelectionParams::from_options(options, per_chunk);
        let picked = select_sentences(chunk, &ranking.scores, &params);
        debug!(
            chunk = chunk_index,
            sentence_count = chunk.len(),
            selected_count = picked.len(),
            "summarized chunk"
        );

        let weight = chunk.len() as f64 / total;
        scores.extend(ranking.scores.iter().map(|s| s * weight));
        survivors.extend(picked.into_iter().map(|i| chunk[i].clone()));
    }

    let joined_chars =
        survivors.iter().map(|s| s.char_count).sum::<usize>() + survivors.len().saturating_sub(1);
    if survivors.len() > options.max_sentences || joined_chars > options.max_chars {
        debug!(
            candidates = survivors.len(),
            joined_chars, "reducing concatenated chunk summaries"
        );
        let ranking = rank_sentences(&survivors, options);
        let params = SelectionParams::from_options(options, options.max_sentences);
        let picked = select_sentences(&survivors, &ranking.scores, &params);
        survivors = picked.into_iter().map(|i| survivors[i].clone()).collect();
    }

    Selection {
        selected: survivors,
        scores,
        chunk_count: chunks.len(),
    }
}
