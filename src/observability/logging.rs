//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Select the output format
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for machine consumption, pretty format for development
//! - `RUST_LOG` overrides the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Builds the level filter: `RUST_LOG` if set, the configured level otherwise.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
