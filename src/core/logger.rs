//! Named logger handles
//!
//! A [`Logger`] is created by a [`LoggerRegistry`](super::registry::LoggerRegistry)
//! and never changes afterwards. Every logger of a registry shares one
//! [`Pipeline`]: the line formatter, the appender and the metrics.

use super::{
    appender::{Appender, OutputTarget},
    error::Result,
    formatter::{LineFormatter, LogRecord},
    log_level::LogLevel,
    log_value::LogValue,
    metrics::LoggerMetrics,
    serializer::serialize,
};
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Formatting and output shared by all loggers of one registry
pub(crate) struct Pipeline {
    formatter: LineFormatter,
    appender: Mutex<Box<dyn Appender>>,
    metrics: LoggerMetrics,
    pid: u32,
}

impl Pipeline {
    pub(crate) fn new(formatter: LineFormatter, appender: Box<dyn Appender>) -> Self {
        Self {
            formatter,
            appender: Mutex::new(appender),
            metrics: LoggerMetrics::new(),
            pid: std::process::id(),
        }
    }

    pub(crate) fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub(crate) fn formatter(&self) -> &LineFormatter {
        &self.formatter
    }

    pub(crate) fn appender_name(&self) -> String {
        self.appender.lock().name().to_string()
    }

    /// Hand one line to the appender; the lock keeps lines whole
    fn write(&self, target: OutputTarget, line: &str) -> Result<()> {
        self.appender.lock().append(target, line)?;
        self.metrics.record_emitted(target);
        Ok(())
    }

    pub(crate) fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }
}

pub struct Logger {
    name: String,
    level: LogLevel,
    pipeline: Arc<Pipeline>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, level: LogLevel, pipeline: Arc<Pipeline>) -> Self {
        Self {
            name: name.into(),
            level,
            pipeline,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective level, fixed at creation
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level.allows(level)
    }

    pub fn debug(&self, args: &[LogValue<'_>]) {
        self.log_at(LogLevel::Debug, args);
    }

    pub fn info(&self, args: &[LogValue<'_>]) {
        self.log_at(LogLevel::Info, args);
    }

    pub fn warn(&self, args: &[LogValue<'_>]) {
        self.log_at(LogLevel::Warn, args);
    }

    pub fn error(&self, args: &[LogValue<'_>]) {
        self.log_at(LogLevel::Error, args);
    }

    /// Log at a level given by name.
    ///
    /// An unknown name drops the message and logs a WARN line about the bad
    /// level on this logger instead.
    ///
    /// # Panics
    ///
    /// Panics if the output stream cannot be written, like `println!`.
    pub fn log(&self, level_name: &str, args: &[LogValue<'_>]) {
        if let Err(err) = self.try_log(level_name, args) {
            panic!("{}", err);
        }
    }

    /// Log at a typed level.
    ///
    /// # Panics
    ///
    /// Panics if the output stream cannot be written, like `println!`.
    pub fn log_at(&self, level: LogLevel, args: &[LogValue<'_>]) {
        if let Err(err) = self.try_log_at(level, args) {
            panic!("{}", err);
        }
    }

    /// Like [`Logger::log`], returning write failures instead of panicking
    pub fn try_log(&self, level_name: &str, args: &[LogValue<'_>]) -> Result<()> {
        match LogLevel::lookup(level_name) {
            Some(level) => self.try_log_at(level, args),
            None => {
                self.pipeline.metrics.record_invalid_level();
                let notice = format!("Invalid log level: {}. The line was not logged.", level_name);
                self.try_log_at(LogLevel::Warn, &[LogValue::from(notice)])
            }
        }
    }

    /// Like [`Logger::log_at`], returning write failures instead of panicking
    pub fn try_log_at(&self, level: LogLevel, args: &[LogValue<'_>]) -> Result<()> {
        if !self.level.allows(level) {
            self.pipeline.metrics.record_suppressed();
            return Ok(());
        }

        let record = LogRecord {
            level,
            logger_name: &self.name,
            pid: self.pipeline.pid,
            timestamp: Local::now(),
            message: serialize(args),
        };
        let line = self.pipeline.formatter.format(&record);

        self.pipeline.write(level.target(), &line)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish()
    }
}
