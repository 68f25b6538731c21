use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One segmented sentence.
///
/// `start..end` is the byte span of the raw sentence in the source text
/// (UTF-8 byte offsets, not char offsets); `text` is the cleaned form that is
/// ranked and displayed. Never mutated after segmentation; selection works
/// on indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position in the segmented list.
    pub index: usize,
    pub text: String,
    /// Byte offset (not char offset) of the raw span start in the source.
    pub start: usize,
    /// Byte offset (not char offset) one past the raw span end.
    pub end: usize,
    pub word_count: usize,
    pub char_count: usize,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>, span: Range<usize>) -> Self {
        let text = text.into();
        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();
        Self {
            index,
            text,
            start: span.start,
            end: span.end,
            word_count,
            char_count,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}
