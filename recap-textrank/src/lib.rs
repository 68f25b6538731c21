//! # recap-textrank
//!
//! Extractive summarization with TextRank: sentence segmentation → TF-IDF →
//! cosine similarity graph → damped PageRank → budgeted selection with
//! near-duplicate suppression. Long texts are summarized per chunk and then
//! reduced.
//!
//! Pure and synchronous. Every entry point is safe to call from many threads.

pub mod algorithms;
pub mod engine;
pub mod format;
pub mod pipeline;

pub use algorithms::pagerank::PageRankOutcome;
pub use engine::{extract_key_phrases, summarize, summarize_batch, TextRankEngine};
pub use recap_core::language::detect_language;
