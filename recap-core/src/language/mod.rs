//! Supported languages and their static word tables.
//!
//! Languages form a closed set. Unknown codes resolve to English so the
//! pipeline always has a stopword and abbreviation table to work with.

mod abbreviations;
mod stopwords;

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::constants::LANGUAGE_DETECTION_WINDOW;

/// A language the summarizer has tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

static EN_STOPWORDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| stopwords::ENGLISH.iter().copied().collect());
static ES_STOPWORDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| stopwords::SPANISH.iter().copied().collect());
static FR_STOPWORDS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| stopwords::FRENCH.iter().copied().collect());

static EN_ABBREVIATIONS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| abbreviations::ENGLISH.iter().copied().collect());
static ES_ABBREVIATIONS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| abbreviations::SPANISH.iter().copied().collect());
static FR_ABBREVIATIONS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| abbreviations::FRENCH.iter().copied().collect());

impl Language {
    /// All supported languages, in tie-breaking order for detection.
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    /// Strict parse of a language code. Accepts region suffixes (`en-US`, `fr_CA`).
    pub fn parse(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Lenient parse: unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or(Self::En)
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    pub fn stopwords(self) -> &'static FxHashSet<&'static str> {
        match self {
            Self::En => &EN_STOPWORDS,
            Self::Es => &ES_STOPWORDS,
            Self::Fr => &FR_STOPWORDS,
        }
    }

    pub fn abbreviations(self) -> &'static FxHashSet<&'static str> {
        match self {
            Self::En => &EN_ABBREVIATIONS,
            Self::Es => &ES_ABBREVIATIONS,
            Self::Fr => &FR_ABBREVIATIONS,
        }
    }

    /// `word` must already be lowercased.
    pub fn is_stopword(self, word: &str) -> bool {
        self.stopwords().contains(word)
    }

    /// `word` must already be lowercased and stripped of its trailing period.
    pub fn is_abbreviation(self, word: &str) -> bool {
        self.abbreviations().contains(word)
    }

    /// Characters that open a new sentence in this language (Spanish `¡` and `¿`).
    pub fn opening_marks(self) -> &'static [char] {
        match self {
            Self::Es => &['¡', '¿'],
            Self::En | Self::Fr => &[],
        }
    }

    /// High-frequency function words used to vote during detection.
    fn markers(self) -> &'static [&'static str] {
        match self {
            Self::En => stopwords::ENGLISH_MARKERS,
            Self::Es => stopwords::SPANISH_MARKERS,
            Self::Fr => stopwords::FRENCH_MARKERS,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Guess the language of `text` by marker-word voting over its first words.
///
/// Ties and texts with no marker hits resolve to English.
pub fn detect_language(text: &str) -> Language {
    let mut votes = [0usize; Language::ALL.len()];

    for word in text.split_whitespace().take(LANGUAGE_DETECTION_WINDOW) {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        for (slot, language) in Language::ALL.iter().enumerate() {
            if language.markers().contains(&word.as_str()) {
                votes[slot] += 1;
            }
        }
    }

    let mut best = Language::En;
    let mut best_votes = 0;
    for (slot, language) in Language::ALL.iter().enumerate() {
        if votes[slot] > best_votes {
            best = *language;
            best_votes = votes[slot];
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_suffixes() {
        assert_eq!(Language::parse("en-US"), Some(Language::En));
        assert_eq!(Language::parse("FR_ca"), Some(Language::Fr));
        assert_eq!(Language::parse("es"), Some(Language::Es));
        assert_eq!(Language::parse("de"), None);
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Language::from_code("xx"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn tables_are_lowercase() {
        for language in Language::ALL {
            for word in language.stopwords() {
                assert_eq!(*word, word.to_lowercase());
            }
            for word in language.abbreviations() {
                assert_eq!(*word, word.to_lowercase());
            }
        }
    }

    #[test]
    fn detects_each_language() {
        assert_eq!(
            detect_language("The meeting was about the budget and it was approved."),
            Language::En
        );
        assert_eq!(
            detect_language("El equipo está de acuerdo con los cambios para el proyecto."),
            Language::Es
        );
        assert_eq!(
            detect_language("Le projet est terminé et les résultats sont dans le rapport."),
            Language::Fr
        );
    }

    #[test]
    fn empty_text_detects_english() {
        assert_eq!(detect_language(""), Language::En);
        assert_eq!(detect_language("12345 ..."), Language::En);
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::Fr).unwrap();
        assert_eq!(json, "\"fr\"");
        let parsed: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, Language::Es);
    }
}
