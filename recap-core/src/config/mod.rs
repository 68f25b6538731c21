//! Configuration system for Recap.
//! TOML-based, layered: per-call options > env (`RECAP_*`) > config file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod recap_config;
pub mod summarizer_config;

pub use observability_config::ObservabilityConfig;
pub use recap_config::RecapConfig;
pub use summarizer_config::SummarizerConfig;
