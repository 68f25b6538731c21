//! Ranking pipeline orchestrator.
//!
//! Vectorize → similarity graph → PageRank → selection. Texts over the chunk
//! threshold are routed through [`chunking`].

pub mod chunking;

use recap_core::models::ResolvedOptions;
use recap_core::Sentence;
use tracing::debug;

use crate::algorithms::pagerank::{pagerank, PageRankParams};
use crate::algorithms::selection::{select_sentences, SelectionParams};
use crate::algorithms::similarity::build_similarity_matrix;
use crate::algorithms::tfidf::vectorize_texts;

/// PageRank scores for one sentence list plus convergence diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    pub edges: usize,
}

/// Sentences kept by the pipeline and the score vector they were chosen from.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Kept sentences in source order.
    pub selected: Vec<Sentence>,
    /// Index-aligned with the full segmented list.
    pub scores: Vec<f64>,
    pub chunk_count: usize,
}

/// Score every sentence with TextRank. A single sentence scores 1.0 without
/// building a graph.
pub fn rank_sentences(sentences: &[Sentence], options: &ResolvedOptions) -> Ranking {
    if sentences.len() < 2 {
        return Ranking {
            scores: vec![1.0; sentences.len()],
            iterations: 0,
            converged: true,
            edges: 0,
        };
    }

    let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
    let model = vectorize_texts(&texts, options.language);
    let similarity = build_similarity_matrix(&model.vectors, options.edge_threshold);
    let edges = similarity.edge_count();
    let transition = similarity.to_transition();
    let outcome = pagerank(&transition, &PageRankParams::from(options));

    debug!(
        sentence_count = sentences.len(),
        graph_edges = edges,
        pagerank_iterations = outcome.iterations,
        pagerank_converged = outcome.converged,
        "ranked sentences"
    );

    Ranking {
        scores: outcome.scores,
        iterations: outcome.iterations,
        converged: outcome.converged,
        edges,
    }
}

/// Rank and select over already segmented sentences of `text`.
pub fn run_pipeline(text: &str, sentences: &[Sentence], options: &ResolvedOptions) -> Selection {
    if text.chars().count() > options.chunk_threshold {
        return chunking::summarize_chunked(text, sentences, options);
    }

    let ranking = rank_sentences(sentences, options);
    let params = SelectionParams::from_options(options, options.max_sentences);
    let picked = select_sentences(sentences, &ranking.scores, &params);
    debug!(selected_count = picked.len(), "selected sentences");

    Selection {
        selected: picked.into_iter().map(|i| sentences[i].clone()).collect(),
        scores: ranking.scores,
        chunk_count: 1,
    }
}
