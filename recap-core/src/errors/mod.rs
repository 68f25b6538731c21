//! Error handling for Recap.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod summarize_error;

pub use config_error::ConfigError;
pub use error_code::RecapErrorCode;
pub use summarize_error::{RecapResult, SummarizeError};
