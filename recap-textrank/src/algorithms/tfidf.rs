//! TF-IDF vectors over the sentences of one document.

use recap_core::Language;
use rustc_hash::FxHashMap;

/// Sparse TF-IDF vector of one sentence with its cached Euclidean norm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    pub weights: FxHashMap<String, f64>,
    pub magnitude: f64,
}

impl TermVector {
    pub fn new(weights: FxHashMap<String, f64>) -> Self {
        let magnitude = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        Self { weights, magnitude }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude <= f64::EPSILON
    }

    /// Dot product over the shared terms.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|(term, w)| large.weights.get(term).map(|v| w * v))
            .sum()
    }
}

/// Vectors for every sentence plus the shared IDF table.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    pub vectors: Vec<TermVector>,
    pub idf: FxHashMap<String, f64>,
}

/// Lowercase, replace non-word characters with spaces, split on whitespace,
/// and drop stopwords and single-character remnants.
pub fn tokenize(text: &str, language: Language) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();
    normalized
        .split_whitespace()
        .filter(|token| token.chars().nth(1).is_some() && !language.is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Build TF-IDF vectors from already tokenized sentences.
///
/// TF is the term count divided by the sentence's token count; IDF is
/// `ln(total / containing)`, so a term present in every sentence weighs 0.
/// A sentence with no tokens gets a zero vector.
pub fn vectorize(tokenized: &[Vec<String>]) -> TfIdfModel {
    let total = tokenized.len() as f64;

    let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
    let mut term_counts: Vec<FxHashMap<&str, usize>> = Vec::with_capacity(tokenized.len());
    for tokens in tokenized {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        for term in counts.keys() {
            *document_frequency.entry(*term).or_insert(0) += 1;
        }
        term_counts.push(counts);
    }

    let idf: FxHashMap<String, f64> = document_frequency
        .iter()
        .map(|(term, &df)| (term.to_string(), (total / df as f64).ln()))
        .collect();

    let vectors = tokenized
        .iter()
        .zip(&term_counts)
        .map(|(tokens, counts)| {
            if tokens.is_empty() {
                return TermVector::default();
            }
            let length = tokens.len() as f64;
            let weights = counts
                .iter()
                .map(|(term, &count)| {
                    let tf = count as f64 / length;
                    let weight = tf * idf.get(*term).copied().unwrap_or(0.0);
                    (term.to_string(), weight)
                })
                .collect();
            TermVector::new(weights)
        })
        .collect();

    TfIdfModel { vectors, idf }
}

/// Tokenize and vectorize sentence texts in one step.
pub fn vectorize_texts<S: AsRef<str>>(texts: &[S], language: Language) -> TfIdfModel {
    let tokenized: Vec<Vec<String>> = texts
        .iter()
        .map(|t| tokenize(t.as_ref(), language))
        .collect();
    vectorize(&tokenized)
}
