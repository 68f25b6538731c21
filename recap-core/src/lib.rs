//! # recap-core
//!
//! Foundation crate for the Recap extractive summarizer.
//! Defines types, traits, errors, config, language tables, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod language;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::RecapConfig;
pub use errors::{RecapResult, SummarizeError};
pub use language::{detect_language, Language};
pub use models::{
    ResolvedOptions, SegmentationStrategy, Sentence, SummaryFormat, SummaryOptions,
    SummaryResult,
};
