//! Top-level Recap configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, SummarizerConfig};
use crate::errors::{ConfigError, SummarizeError};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Per-call `SummaryOptions`
/// 2. Environment variables (`RECAP_*`)
/// 3. Config file (`recap.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecapConfig {
    pub summarizer: SummarizerConfig,
    pub observability: ObservabilityConfig,
}

impl RecapConfig {
    /// Load configuration from an optional TOML file, then apply `RECAP_*`
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Applies the same rules as per-call options so a config that loads is
    /// guaranteed to resolve.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = self.summarizer.to_options()?;
        options.resolve("").map_err(|e| match e {
            SummarizeError::InvalidOption { field, message } => ConfigError::ValidationFailed {
                field: format!("summarizer.{field}"),
                message,
            },
            SummarizeError::Config(inner) => inner,
        })?;
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `RECAP_MAX_SENTENCES`, `RECAP_DAMPING_FACTOR`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut RecapConfig) {
        let summarizer = &mut config.summarizer;
        if let Ok(val) = std::env::var("RECAP_LOCALE") {
            summarizer.locale = Some(val);
        }
        if let Some(v) = env_parse::<usize>("RECAP_MAX_SENTENCES") {
            summarizer.max_sentences = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RECAP_MAX_CHARS") {
            summarizer.max_chars = Some(v);
        }
        if let Some(v) = env_parse::<f64>("RECAP_DAMPING_FACTOR") {
            summarizer.damping_factor = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RECAP_MAX_ITERATIONS") {
            summarizer.max_iterations = Some(v);
        }
        if let Some(v) = env_parse::<f64>("RECAP_SIMILARITY_THRESHOLD") {
            summarizer.similarity_threshold = Some(v);
        }
        if let Some(v) = env_parse::<bool>("RECAP_REMOVE_NEAR_DUPLICATES") {
            summarizer.remove_near_duplicates = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RECAP_CHUNK_THRESHOLD") {
            summarizer.chunk_threshold = Some(v);
        }
        if let Ok(val) = std::env::var("RECAP_LOG") {
            config.observability.log_level = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}
