//! Sentence similarity: cosine over TF-IDF vectors for the ranking graph,
//! Jaccard over word sets for near-duplicate suppression.

use rustc_hash::FxHashSet;

use super::tfidf::TermVector;

/// Square matrix of pairwise sentence similarities, row-major.
///
/// The diagonal is always zero and entries at or below the edge threshold
/// are zeroed.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

/// Row-stochastic matrix derived from a [`SimilarityMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Number of non-zero entries (directed edges).
    pub fn edge_count(&self) -> usize {
        self.values.iter().filter(|v| **v > 0.0).count()
    }

    /// Divide each row by its sum. Rows with no edges become uniform `1/n`.
    pub fn to_transition(&self) -> TransitionMatrix {
        let n = self.size;
        let mut values = Vec::with_capacity(n * n);
        for i in 0..n {
            let row = self.row(i);
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                values.extend(row.iter().map(|v| v / sum));
            } else {
                values.extend(std::iter::repeat(1.0 / n as f64).take(n));
            }
        }
        TransitionMatrix { size: n, values }
    }
}

impl TransitionMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }
}

/// Cosine similarity of two term vectors. 0 when either is a zero vector.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    (a.dot(b) / (a.magnitude * b.magnitude)).clamp(0.0, 1.0)
}

/// Pairwise cosine similarities with weak edges (`<= threshold`) zeroed.
///
/// Both `(i, j)` and `(j, i)` are computed rather than mirrored.
pub fn build_similarity_matrix(vectors: &[TermVector], threshold: f64) -> SimilarityMatrix {
    let n = vectors.len();
    let mut values = vec![0.0f64; n * n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let sim = cosine_similarity(&vectors[i], &vectors[j]);
            if sim > threshold {
                values[i * n + j] = sim;
            }
        }
    }
    SimilarityMatrix { size: n, values }
}

/// Lowercased whitespace-separated word set, as used by [`jaccard_similarity`].
pub fn word_set(text: &str) -> FxHashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// `|A ∩ B| / |A ∪ B|` over two word sets. 0 when both are empty.
pub fn jaccard(a: &FxHashSet<String>, b: &FxHashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Jaccard similarity of the lowercase word sets of two texts.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    jaccard(&word_set(a), &word_set(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::tfidf::vectorize_texts;
    use recap_core::Language;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let model = vectorize_texts(&["budget review", "budget review", "weather"], Language::En);
        let sim = cosine_similarity(&model.vectors[0], &model.vectors[1]);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_vectors_have_similarity_zero() {
        let model = vectorize_texts(&["budget review", "weather report"], Language::En);
        assert_eq!(cosine_similarity(&model.vectors[0], &model.vectors[1]), 0.0);
    }

    #[test]
    fn zero_vector_never_divides_by_zero() {
        let zero = TermVector::default();
        let model = vectorize_texts(&["budget review", "weather"], Language::En);
        assert_eq!(cosine_similarity(&zero, &model.vectors[0]), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn matrix_has_zero_diagonal_and_is_symmetric() {
        let model = vectorize_texts(
            &[
                "budget review meeting",
                "budget review planning",
                "hiring plan review",
                "weather outlook",
            ],
            Language::En,
        );
        let m = build_similarity_matrix(&model.vectors, 0.0);
        assert_eq!(m.size(), 4);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..4 {
                assert!((m.get(i, j) - m.get(j, i)).abs() < 1e-12);
            }
        }
        assert!(m.get(0, 1) > 0.0);
    }

    #[test]
    fn weak_edges_are_thresholded() {
        let model = vectorize_texts(
            &["budget review meeting", "budget review planning", "weather outlook"],
            Language::En,
        );
        let loose = build_similarity_matrix(&model.vectors, 0.0);
        let strict = build_similarity_matrix(&model.vectors, 0.99);
        assert!(loose.edge_count() > 0);
        assert_eq!(strict.edge_count(), 0);
    }

    #[test]
    fn transition_rows_sum_to_one() {
        let model = vectorize_texts(
            &["budget review meeting", "budget review planning", "weather outlook"],
            Language::En,
        );
        let t = build_similarity_matrix(&model.vectors, 0.1).to_transition();
        for i in 0..t.size() {
            let sum: f64 = t.row(i).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
        // "weather outlook" shares nothing: its row is uniform.
        assert!(t.row(2).iter().all(|v| (v - 1.0 / 3.0).abs() < 1e-12));
    }

    #[test]
    fn jaccard_counts_distinct_words() {
        let sim = jaccard_similarity(
            "The team approved the budget.",
            "The team approved the budget for next year.",
        );
        // {the, team, approved} over 8 distinct words
        assert!((sim - 3.0 / 8.0).abs() < 1e-12);
        assert_eq!(jaccard_similarity("", ""), 0.0);
        assert_eq!(jaccard_similarity("Same words", "same WORDS"), 1.0);
    }
}
