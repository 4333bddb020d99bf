//! Appender trait for log output destinations

use super::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output stream a formatted line is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    Stdout,
    Stderr,
}

impl OutputTarget {
    pub fn to_str(&self) -> &'static str {
        match self {
            OutputTarget::Stdout => "stdout",
            OutputTarget::Stderr => "stderr",
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Receives finished lines (without the trailing newline).
///
/// Implementations must write `line` followed by `\n` as a single write so
/// concurrent loggers never interleave partial lines.
pub trait Appender: Send {
    fn append(&mut self, target: OutputTarget, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
