//! Summarization errors.
//!
//! The pipeline itself is pure and infallible; the only failure mode is a
//! caller handing in options that cannot be interpreted.

use super::error_code::{self, RecapErrorCode};
use super::ConfigError;

/// Errors returned by `summarize` and friends.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("invalid option {field}: {message}")]
    InvalidOption { field: String, message: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SummarizeError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl RecapErrorCode for SummarizeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidOption { .. } => error_code::INVALID_OPTION,
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used across the summarizer.
pub type RecapResult<T> = Result<T, SummarizeError>;
