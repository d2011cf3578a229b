//! Logging setup for the server binary.
//!
//! `RUST_LOG` takes precedence over the configured level when it is set.

use tracing_subscriber::EnvFilter;

use crate::error::{EngineError, EngineResult};

/// Builds the log filter, preferring `RUST_LOG` over `default_level`.
pub fn env_filter(default_level: &str) -> EngineResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| EngineError::Telemetry {
            message: format!("invalid log level/filter '{}': {}", default_level, e),
        }),
    }
}

/// Installs the global fmt subscriber.
pub fn init(default_level: &str) -> EngineResult<()> {
    let filter = env_filter(default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| EngineError::Telemetry {
            message: e.to_string(),
        })
}
