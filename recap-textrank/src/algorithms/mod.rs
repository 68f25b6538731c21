//! Summarization algorithms: sentence splitting, TF-IDF, similarity, PageRank, selection.

pub mod key_phrases;
pub mod pagerank;
pub mod selection;
pub mod sentence_splitter;
pub mod similarity;
pub mod tfidf;
