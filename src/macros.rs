//! Logging macros for variadic log calls.
//!
//! Each argument is converted with [`LogValue::from`](crate::LogValue), so
//! strings, numbers, booleans, JSON values and prepared `LogValue`s can be
//! mixed freely.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::{error, info};
//!
//! let registry = LoggerRegistry::builder()
//!     .appender(MemoryAppender::new())
//!     .build()
//!     .unwrap();
//! let logger = registry.get_logger("server", None);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // Several arguments are joined by a space
//! let port = 8080;
//! info!(logger, "Server listening on port", port);
//!
//! // Errors and structured values
//! let err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
//! let details = serde_json::json!({"port": port});
//! error!(logger, "bind failed", LogValue::error(&err), details);
//! ```

/// Log at a level given by name.
///
/// An unknown level name logs a warning about the name instead of the message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build().unwrap();
/// # let logger = registry.root();
/// use rust_console_logger::log;
/// log!(logger, "INFO", "Simple message");
/// log!(logger, "ERROR", "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(,)?) => {
        $logger.log($level, &[])
    };
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log($level, &[$($crate::LogValue::from($arg)),+])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build().unwrap();
/// # let logger = registry.root();
/// use rust_console_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(,)?) => {
        $logger.debug(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug(&[$($crate::LogValue::from($arg)),+])
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build().unwrap();
/// # let logger = registry.root();
/// use rust_console_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(,)?) => {
        $logger.info(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info(&[$($crate::LogValue::from($arg)),+])
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build().unwrap();
/// # let logger = registry.root();
/// use rust_console_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(,)?) => {
        $logger.warn(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn(&[$($crate::LogValue::from($arg)),+])
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build().unwrap();
/// # let logger = registry.root();
/// use rust_console_logger::error;
/// error!(logger, "Connection failed");
/// error!(logger, "HTTP status", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(,)?) => {
        $logger.error(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error(&[$($crate::LogValue::from($arg)),+])
    };
}
