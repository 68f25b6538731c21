//! Seams the collaborators (persistence layer, UI) program against.

pub mod summarizer;

pub use summarizer::ISummarizer;
