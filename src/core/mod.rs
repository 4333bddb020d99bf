//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_value;
pub mod logger;
pub mod metrics;
pub mod palette;
pub mod registry;
pub mod serializer;

pub use appender::{Appender, OutputTarget};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use formatter::{LineFormatter, LogRecord};
pub use log_level::LogLevel;
pub use log_value::{ErrorValue, LogValue, Structured};
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use palette::{ColorMode, Palette};
pub use registry::{LoggerRegistry, RegistryBuilder};
pub use serializer::serialize;
