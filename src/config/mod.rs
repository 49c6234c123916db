//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DispatchConfig (validated, immutable)
//!     → lifecycle::startup builds the route table
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → watcher.rs builds the table and stores it in SharedRouteTable
//!     → ReloadEvent (applied or rejected)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{CustomRouteConfig, DispatchConfig, LogFormat, LoggingConfig, RoutesConfig};
pub use validation::ValidationError;
pub use watcher::{ConfigWatcher, ReloadEvent};
