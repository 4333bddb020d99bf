//! Logger registry
//!
//! Maps logger names to their single [`Logger`] instance. The first request
//! for a name decides the logger's level; later requests for the same name
//! get the same instance back whatever level they ask for.

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::Result,
    formatter::LineFormatter,
    log_level::LogLevel,
    log_value::LogValue,
    logger::{Logger, Pipeline},
    metrics::LoggerMetrics,
    palette::Palette,
};
use crate::appenders::ConsoleAppender;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub struct LoggerRegistry {
    config: LoggerConfig,
    pipeline: Arc<Pipeline>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    root: Arc<Logger>,
}

impl LoggerRegistry {
    /// Create a builder for LoggerRegistry
    ///
    /// # Example
    /// ```
    /// use rust_console_logger::prelude::*;
    ///
    /// let registry = LoggerRegistry::builder()
    ///     .global_level(LogLevel::Info)
    ///     .appender(MemoryAppender::new())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(registry.root().name(), "app");
    /// ```
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry configured from the environment, writing to the console
    pub fn from_env() -> Self {
        let config = LoggerConfig::from_env();
        let palette = Palette::detect(config.color);
        Self::assemble(config, palette, Box::new(ConsoleAppender::new()))
    }

    fn assemble(config: LoggerConfig, palette: Palette, appender: Box<dyn Appender>) -> Self {
        let pipeline = Arc::new(Pipeline::new(LineFormatter::new(palette), appender));
        let root = Arc::new(Logger::new(
            config.root_logger_name.clone(),
            config.global_level,
            Arc::clone(&pipeline),
        ));

        let mut loggers = HashMap::new();
        loggers.insert(config.root_logger_name.clone(), Arc::clone(&root));

        Self {
            config,
            pipeline,
            loggers: RwLock::new(loggers),
            root,
        }
    }

    /// Get the logger called `name`, creating it on first use.
    ///
    /// `level` only matters for the call that creates the logger; a new
    /// logger without a level uses the configured global level.
    pub fn get_logger(&self, name: &str, level: Option<LogLevel>) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Logger::new(
                name,
                level.unwrap_or(self.config.global_level),
                Arc::clone(&self.pipeline),
            ))
        });
        Arc::clone(logger)
    }

    /// The logger named by `config.root_logger_name`, created with the registry
    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Registered names in sorted order
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn palette(&self) -> Palette {
        self.pipeline.formatter().palette()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.pipeline.metrics()
    }

    pub fn flush(&self) -> Result<()> {
        self.pipeline.flush()
    }

    /// Log the startup banner on the root logger
    pub fn announce_startup(&self) {
        self.root.info(&[LogValue::from(format!(
            "Logger initialized. Global log level: {}. Crate version: {}",
            self.config.global_level,
            env!("CARGO_PKG_VERSION")
        ))]);
        self.root.debug(&[LogValue::from(format!(
            "Use LOG_LEVEL=INFO to decrease verbosity. Supported values: {}",
            LogLevel::supported_names()
        ))]);
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("config", &self.config)
            .field("appender", &self.pipeline.appender_name())
            .field("loggers", &self.logger_names())
            .finish()
    }
}

/// Builder for constructing a LoggerRegistry with a fluent API
pub struct RegistryBuilder {
    config: LoggerConfig,
    palette: Option<Palette>,
    appender: Option<Box<dyn Appender>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            palette: None,
            appender: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn global_level(mut self, level: LogLevel) -> Self {
        self.config.global_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn root_logger_name(mut self, name: impl Into<String>) -> Self {
        self.config.root_logger_name = name.into();
        self
    }

    /// Use this palette instead of detecting one from `config.color`
    #[must_use = "builder methods return a new value"]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Output destination; defaults to [`ConsoleAppender`]
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    pub fn build(self) -> Result<LoggerRegistry> {
        self.config.validate()?;

        let palette = self
            .palette
            .unwrap_or_else(|| Palette::detect(self.config.color));
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));

        Ok(LoggerRegistry::assemble(self.config, palette, appender))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
