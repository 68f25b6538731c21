//! Stable error codes surfaced to collaborators (persistence layer, UI).

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_OPTION: &str = "INVALID_OPTION";

/// Maps an error to a stable, machine-readable code.
pub trait RecapErrorCode {
    fn error_code(&self) -> &'static str;
}
