//! Logger configuration
//!
//! Resolved once when a registry is built and never changed afterwards.
//! [`LoggerConfig::from_env`] reads the process environment;
//! [`LoggerConfig::from_lookup`] resolves the same keys from any source.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::palette::ColorMode;
use serde::{Deserialize, Serialize};

/// Global minimum level, case-insensitive
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Name of the root logger
pub const ENV_ROOT_LOGGER_NAME: &str = "ROOT_LOGGER_NAME";
/// Set to `1` to disable colors
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub const DEFAULT_ROOT_LOGGER_NAME: &str = "app";

/// # Examples
///
/// ```
/// use rust_console_logger::{ColorMode, LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::new()
///     .with_global_level(LogLevel::Info)
///     .with_root_logger_name("api")
///     .with_color(ColorMode::Never);
///
/// assert_eq!(config.global_level, LogLevel::Info);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Effective level of loggers created without an explicit level
    pub global_level: LogLevel,
    pub root_logger_name: String,
    pub color: ColorMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            global_level: LogLevel::Debug,
            root_logger_name: DEFAULT_ROOT_LOGGER_NAME.to_string(),
            color: ColorMode::Auto,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_global_level(mut self, level: LogLevel) -> Self {
        self.global_level = level;
        self
    }

    #[must_use]
    pub fn with_root_logger_name(mut self, name: impl Into<String>) -> Self {
        self.root_logger_name = name.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Read `LOG_LEVEL`, `ROOT_LOGGER_NAME` and `NO_COLOR` from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`.
    ///
    /// Unknown or missing levels fall back to DEBUG, a missing or empty root
    /// name falls back to `"app"`, and `NO_COLOR=1` forces colors off.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let global_level = lookup(ENV_LOG_LEVEL)
            .and_then(|value| value.parse().ok())
            .unwrap_or(LogLevel::Debug);

        let root_logger_name = lookup(ENV_ROOT_LOGGER_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT_LOGGER_NAME.to_string());

        let color = match lookup(ENV_NO_COLOR).as_deref() {
            Some("1") => ColorMode::Never,
            _ => ColorMode::Auto,
        };

        Self {
            global_level,
            root_logger_name,
            color,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_logger_name.is_empty() {
            return Err(LoggerError::config(
                "LoggerConfig",
                "root logger name must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.global_level, LogLevel::Debug);
        assert_eq!(config.root_logger_name, "app");
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = LoggerConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "warn")]));
        assert_eq!(config.global_level, LogLevel::Warn);
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let config = LoggerConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "chatty")]));
        assert_eq!(config.global_level, LogLevel::Debug);
    }

    #[test]
    fn test_root_name_override() {
        let config = LoggerConfig::from_lookup(lookup_from(&[("ROOT_LOGGER_NAME", "worker")]));
        assert_eq!(config.root_logger_name, "worker");

        let config = LoggerConfig::from_lookup(lookup_from(&[("ROOT_LOGGER_NAME", "")]));
        assert_eq!(config.root_logger_name, "app");
    }

    #[test]
    fn test_no_color_flag() {
        let config = LoggerConfig::from_lookup(lookup_from(&[("NO_COLOR", "1")]));
        assert_eq!(config.color, ColorMode::Never);

        let config = LoggerConfig::from_lookup(lookup_from(&[("NO_COLOR", "0")]));
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_validate_rejects_empty_root_name() {
        let config = LoggerConfig::new().with_root_logger_name("");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"global_level":"INFO","color":"never"}"#).unwrap();
        assert_eq!(config.global_level, LogLevel::Info);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.root_logger_name, "app");
    }
}
