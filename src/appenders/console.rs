//! Console appender implementation

use crate::core::{Appender, LoggerError, OutputTarget, Result};
use std::io::{self, Write};

/// Writes lines to the process's stdout and stderr
#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }

    fn write_line<W: Write>(mut writer: W, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        writer.write_all(buf.as_bytes())
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, target: OutputTarget, line: &str) -> Result<()> {
        let result = match target {
            OutputTarget::Stdout => Self::write_line(io::stdout().lock(), line),
            OutputTarget::Stderr => Self::write_line(io::stderr().lock(), line),
        };
        result.map_err(|err| LoggerError::write(target, err))
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        io::stdout()
            .flush()
            .map_err(|err| LoggerError::write(OutputTarget::Stdout, err))?;
        io::stderr()
            .flush()
            .map_err(|err| LoggerError::write(OutputTarget::Stderr, err))
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_appends_newline() {
        let mut buf = Vec::new();
        ConsoleAppender::write_line(&mut buf, "hello").unwrap();
        assert_eq!(buf, b"hello\n");
    }

    #[test]
    fn test_console_append_and_flush() {
        let mut appender = ConsoleAppender::new();
        assert_eq!(appender.name(), "console");
        assert!(appender.append(OutputTarget::Stdout, "console appender test").is_ok());
        assert!(appender.flush().is_ok());
    }
}
