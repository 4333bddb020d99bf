//! # Rust Console Logger
//!
//! A small structured console logger with named loggers.
//!
//! ## Features
//!
//! - **Named Loggers**: one immutable logger per name, held by a registry
//! - **Level Filtering**: DEBUG < INFO < WARN < ERROR, fixed per logger
//! - **Colorized Output**: ANSI colors when both streams are terminals
//! - **Stream Routing**: WARN and ERROR go to stderr, everything else to stdout
//!
//! Lines look like
//! `2025-01-08 10:30:45.123  INFO 4242 --- app: message`.
//!
//! ```
//! use rust_console_logger::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let registry = LoggerRegistry::builder()
//!     .global_level(LogLevel::Info)
//!     .appender(memory.clone())
//!     .build()
//!     .unwrap();
//!
//! let svc = registry.get_logger("svc", None);
//! svc.debug(&[LogValue::from("hidden")]);
//! svc.info(&[LogValue::from("hello"), LogValue::from(42)]);
//!
//! assert!(memory.stdout().ends_with("svc: hello 42\n"));
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, ColorMode, LogLevel, LogValue, Logger, LoggerConfig, LoggerError,
        LoggerMetrics, LoggerRegistry, OutputTarget, Palette, RegistryBuilder, Result,
    };
    pub use crate::global::{get_logger, root_logger};
}

pub use crate::appenders::{ConsoleAppender, MemoryAppender};
pub use crate::core::{
    serialize, Appender, ColorMode, ErrorValue, LineFormatter, LogLevel, LogRecord, LogValue,
    Logger, LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, OutputTarget, Palette,
    RegistryBuilder, Result, Structured,
};
pub use crate::global::{get_logger, registry, root_logger};
