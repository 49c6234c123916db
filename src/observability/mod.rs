//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, config, lifecycle
//!     → tracing events (route changes, reloads, validation warnings)
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```

pub mod logging;

pub use logging::init_logging;
