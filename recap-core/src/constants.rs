/// Recap library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of leading words inspected by language detection.
pub const LANGUAGE_DETECTION_WINDOW: usize = 100;

/// Minimum selected sentence count at which `SummaryFormat::Auto` renders bullets.
pub const BULLET_FORMAT_MIN_SENTENCES: usize = 4;

/// Prefix for each line of a bulleted summary.
pub const BULLET_PREFIX: &str = "• ";

/// Tolerance used when checking that a PageRank score vector sums to one.
pub const SCORE_SUM_TOLERANCE: f64 = 1e-4;
