//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that custom routes reference existing commands
//! - Detect duplicate custom routes
//! - Check custom pattern shape in strict mode
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DispatchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::command::builtin_creator;
use crate::config::schema::DispatchConfig;
use crate::routing::matcher::{validate_pattern, PatternError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("route '{pattern}' references unknown command '{command}'")]
    UnknownCommand { pattern: String, command: String },

    #[error("custom route '{0}' is defined more than once")]
    DuplicateRoute(String),

    #[error(transparent)]
    MalformedPattern(#[from] PatternError),
}

/// Validates `config`, collecting every problem found.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(config.logging.level.clone()));
    }

    let mut seen = HashSet::new();
    for route in &config.routes.custom {
        if !seen.insert(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.pattern.clone()));
        }

        if builtin_creator(&route.command).is_none() {
            errors.push(ValidationError::UnknownCommand {
                pattern: route.pattern.clone(),
                command: route.command.clone(),
            });
        }

        if config.routes.strict {
            if let Err(e) = validate_pattern(&route.pattern) {
                errors.push(e.into());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::CustomRouteConfig;

    fn custom(pattern: &str, command: &str) -> CustomRouteConfig {
        CustomRouteConfig {
            pattern: pattern.into(),
            command: command.into(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DispatchConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DispatchConfig::default();
        config.logging.level = "loud".into();
        config.routes.custom = vec![
            custom("/session/*/heap", "heap_snapshot"),
            custom("/session/*/shot", "screenshot"),
            custom("/session/*/shot", "screenshot"),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidLogLevel("loud".into()),
                ValidationError::UnknownCommand {
                    pattern: "/session/*/heap".into(),
                    command: "heap_snapshot".into(),
                },
                ValidationError::DuplicateRoute("/session/*/shot".into()),
            ]
        );
    }

    #[test]
    fn test_malformed_pattern_only_rejected_when_strict() {
        let mut config = DispatchConfig::default();
        config.routes.custom = vec![custom("/session/*/storage/key*", "status")];
        assert!(validate_config(&config).is_ok());

        config.routes.strict = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::MalformedPattern(PatternError::PartialWildcard { .. })]
        ));
    }
}
