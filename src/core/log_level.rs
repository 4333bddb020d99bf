//! Log level definitions

use super::appender::OutputTarget;
use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tier of a log line.
///
/// Levels compare by weight, so `LogLevel::Debug < LogLevel::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Debug = 10,
    Info = 20,
    Warn = 30,
    Error = 40,
}

impl LogLevel {
    /// All levels in ascending severity order
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Numeric weight used for threshold comparison
    #[inline]
    pub const fn weight(&self) -> u8 {
        *self as u8
    }

    /// Whether a logger at this effective level emits a message at `message_level`
    #[inline]
    pub const fn allows(&self, message_level: LogLevel) -> bool {
        message_level.weight() >= self.weight()
    }

    /// Exact, case-sensitive lookup of a level name.
    ///
    /// Returns `None` for names that carry no weight. Configuration parsing is
    /// case-insensitive and goes through [`FromStr`] instead.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.to_str() == name)
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
        }
    }

    /// Stream a line at this level is written to
    pub const fn target(&self) -> OutputTarget {
        match self {
            LogLevel::Warn | LogLevel::Error => OutputTarget::Stderr,
            LogLevel::Debug | LogLevel::Info => OutputTarget::Stdout,
        }
    }

    /// Comma separated list of every level name
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(LogLevel::to_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
