//! In-memory appender
//!
//! Captures stdout and stderr lines separately. Clones share the same
//! buffers, so a caller can keep one handle and give another to a registry.

use crate::core::{Appender, OutputTarget, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct CapturedStreams {
    stdout: String,
    stderr: String,
}

/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let registry = LoggerRegistry::builder()
///     .appender(memory.clone())
///     .build()
///     .unwrap();
///
/// registry.get_logger("svc", None).warn(&[LogValue::from("disk almost full")]);
///
/// assert!(memory.stdout().is_empty());
/// assert!(memory.stderr().ends_with("svc: disk almost full\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    streams: Arc<Mutex<CapturedStreams>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to stdout so far
    pub fn stdout(&self) -> String {
        self.streams.lock().stdout.clone()
    }

    /// Everything written to stderr so far
    pub fn stderr(&self) -> String {
        self.streams.lock().stderr.clone()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.streams.lock().stdout.lines().map(String::from).collect()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.streams.lock().stderr.lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        let mut streams = self.streams.lock();
        streams.stdout.clear();
        streams.stderr.clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, target: OutputTarget, line: &str) -> Result<()> {
        let mut streams = self.streams.lock();
        let buf = match target {
            OutputTarget::Stdout => &mut streams.stdout,
            OutputTarget::Stderr => &mut streams.stderr,
        };
        buf.push_str(line);
        buf.push('\n');
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
