//! Logging setup
//!
//! The crate only emits `tracing` events; installing a subscriber is up to the
//! application. [`init_logging`] is a convenience for binaries and tests that
//! want formatted output filtered by `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Include thread ids in each line
    pub with_thread_ids: bool,
    /// Route output through the test harness capture
    pub test_writer: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_thread_ids: false,
            test_writer: false,
        }
    }
}

/// Install a global formatted subscriber.
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::Configuration {
            message: format!("Invalid log filter '{}': {}", config.level, e),
        })?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.test_writer {
        registry
            .with(
                fmt::layer()
                    .with_thread_ids(config.with_thread_ids)
                    .with_test_writer(),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_thread_ids(config.with_thread_ids))
            .try_init()
    };

    result.map_err(|e| Error::Configuration {
        message: format!("Failed to install subscriber: {}", e),
    })
}
