//! Process-wide default registry
//!
//! Built from the environment on first use, announcing itself on the root
//! logger. Applications that want control over configuration or output
//! should build their own [`LoggerRegistry`] instead.

use crate::core::{LogLevel, Logger, LoggerRegistry};
use once_cell::sync::OnceCell;
use std::sync::Arc;

static DEFAULT_REGISTRY: OnceCell<LoggerRegistry> = OnceCell::new();

/// The default registry, created on first call
pub fn registry() -> &'static LoggerRegistry {
    DEFAULT_REGISTRY.get_or_init(|| {
        let registry = LoggerRegistry::from_env();
        registry.announce_startup();
        registry
    })
}

/// Get a logger from the default registry
pub fn get_logger(name: &str, level: Option<LogLevel>) -> Arc<Logger> {
    registry().get_logger(name, level)
}

/// Root logger of the default registry
pub fn root_logger() -> Arc<Logger> {
    registry().root()
}
