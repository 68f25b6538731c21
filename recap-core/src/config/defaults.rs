// Single source of truth for all default values.

// --- Segmentation ---
pub const DEFAULT_MIN_SENTENCE_LENGTH: usize = 5;
pub const DEFAULT_MAX_SENTENCE_LENGTH: usize = 1_000;
pub const DEFAULT_CLEAN_WHITESPACE: bool = true;

// --- Graph ---
pub const DEFAULT_EDGE_THRESHOLD: f64 = 0.1;

// --- PageRank ---
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-6;

// --- Selection ---
pub const DEFAULT_MAX_CHARS: usize = 2_000;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_REMOVE_NEAR_DUPLICATES: bool = true;

// Sentence cap derived from text length (chars): (upper bound, cap).
pub const MAX_SENTENCES_TIERS: &[(usize, usize)] = &[(500, 3), (2_000, 5), (5_000, 7)];
pub const MAX_SENTENCES_CEILING: usize = 10;

// --- Chunking ---
pub const DEFAULT_CHUNK_THRESHOLD: usize = 8_000;

// --- Key phrases ---
pub const DEFAULT_MAX_KEY_PHRASES: usize = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
