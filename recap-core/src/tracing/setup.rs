//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the Recap tracing/logging system from defaults.
///
/// Reads the `RECAP_LOG` environment variable for per-crate log levels.
/// Format: `RECAP_LOG=recap_textrank=debug,recap_core=warn`
///
/// Falls back to `info` if `RECAP_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing using an explicit observability config.
///
/// `RECAP_LOG` still wins over `config.log_level` when set.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let level = config.effective_log_level().to_string();
    let json = config.effective_json();
    INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_env("RECAP_LOG").unwrap_or_else(|_| EnvFilter::new(level));

        let registry = tracing_subscriber::registry().with(filter);
        if json {
            registry
                .with(fmt::layer().json().with_target(true))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
        }
    });
}
