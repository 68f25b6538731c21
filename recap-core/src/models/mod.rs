//! Data model shared by the summarizer and its collaborators.

pub mod options;
pub mod sentence;
pub mod summary_result;

pub use options::{
    default_max_sentences, ResolvedOptions, SegmentationStrategy, SummaryFormat,
    SummaryOptions,
};
pub use sentence::Sentence;
pub use summary_result::SummaryResult;
