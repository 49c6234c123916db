//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the dispatcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Logging settings.
    pub logging: LoggingConfig,

    /// Route table assembly.
    pub routes: RoutesConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Route table configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RoutesConfig {
    /// Register the built-in route set.
    pub defaults: bool,

    /// Reject malformed custom patterns when loading.
    /// When false they are accepted and logged.
    pub strict: bool,

    /// Patterns removed after the defaults are registered.
    pub remove: Vec<String>,

    /// Extra routes, registered last.
    pub custom: Vec<CustomRouteConfig>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            defaults: true,
            strict: false,
            remove: Vec::new(),
            custom: Vec::new(),
        }
    }
}

/// A custom pattern bound to a built-in command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CustomRouteConfig {
    /// Route pattern, e.g. `/session/*/heap`.
    pub pattern: String,

    /// Built-in command name, e.g. `screenshot`.
    pub command: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: DispatchConfig = toml::from_str("").unwrap();
        assert_eq!(config, DispatchConfig::default());
        assert!(config.routes.defaults);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let config: DispatchConfig = toml::from_str(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [routes]
            strict = true
            remove = ["/log"]

            [[routes.custom]]
            pattern = "/session/*/heap"
            command = "screenshot"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.routes.strict);
        assert!(config.routes.defaults);
        assert_eq!(config.routes.remove, vec!["/log"]);
        assert_eq!(
            config.routes.custom,
            vec![CustomRouteConfig {
                pattern: "/session/*/heap".into(),
                command: "screenshot".into(),
            }]
        );
    }
}
