//! Logger metrics for observability
//!
//! Counters shared by every logger of a registry: lines written per stream,
//! calls filtered out by level, and calls made with an unknown level name.

use super::appender::OutputTarget;
use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use rust_console_logger::{LoggerMetrics, OutputTarget};
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted(OutputTarget::Stderr);
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.stderr_lines(), 1);
/// assert_eq!(metrics.total_emitted(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    stdout_lines: AtomicU64,
    stderr_lines: AtomicU64,
    /// Calls below the logger's effective level
    suppressed: AtomicU64,
    /// Calls to the generic entry point with an unknown level name
    invalid_levels: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            stdout_lines: AtomicU64::new(0),
            stderr_lines: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            invalid_levels: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_emitted(&self, target: OutputTarget) {
        let counter = match target {
            OutputTarget::Stdout => &self.stdout_lines,
            OutputTarget::Stderr => &self.stderr_lines,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_invalid_level(&self) {
        self.invalid_levels.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn stdout_lines(&self) -> u64 {
        self.stdout_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stderr_lines(&self) -> u64 {
        self.stderr_lines.load(Ordering::Relaxed)
    }

    pub fn total_emitted(&self) -> u64 {
        self.stdout_lines() + self.stderr_lines()
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn invalid_level_count(&self) -> u64 {
        self.invalid_levels.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.stdout_lines.store(0, Ordering::Relaxed);
        self.stderr_lines.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.invalid_levels.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
