//! Rendering selected sentences into the summary string.

use recap_core::constants::{BULLET_FORMAT_MIN_SENTENCES, BULLET_PREFIX};
use recap_core::{Sentence, SummaryFormat};

pub fn format_summary(sentences: &[Sentence], format: SummaryFormat) -> String {
    let bullets = match format {
        SummaryFormat::Bullets => true,
        SummaryFormat::Paragraph => false,
        SummaryFormat::Auto => sentences.len() >= BULLET_FORMAT_MIN_SENTENCES,
    };

    if bullets {
        sentences
            .iter()
            .map(|s| format!("{BULLET_PREFIX}{}", s.text))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
