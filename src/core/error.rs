//! Error types for the console logger

use super::appender::OutputTarget;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown level name during configuration parsing
    #[error("Invalid log level: '{name}'")]
    InvalidLevel { name: String },

    /// Writing or flushing an output stream failed
    #[error("Failed to write log line to {target}: {source}")]
    Write {
        target: OutputTarget,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel { name: name.into() }
    }

    /// Create a stream write error
    pub fn write(target: OutputTarget, source: std::io::Error) -> Self {
        LoggerError::Write { target, source }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("LOUD");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::config("LoggerConfig", "root logger name is empty");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("LOUD");
        assert_eq!(err.to_string(), "Invalid log level: 'LOUD'");

        let err = LoggerError::config("LoggerConfig", "root logger name is empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: root logger name is empty"
        );
    }

    #[test]
    fn test_write_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::write(OutputTarget::Stderr, io_err);

        assert_eq!(
            err.to_string(),
            "Failed to write log line to stderr: pipe closed"
        );
        assert!(err.source().is_some());
    }
}
