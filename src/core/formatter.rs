//! Line formatting
//!
//! Produces lines shaped as
//! `2025-01-08 10:30:45.123  INFO 4242 --- app: message`, each field
//! colored through the formatter's [`Palette`].

use super::log_level::LogLevel;
use super::palette::{Palette, NAME_COLOR, PID_COLOR, TIMESTAMP_COLOR};
use chrono::{DateTime, Local};

/// Local wall-clock timestamp with milliseconds
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Width the level keyword is right-aligned to
pub const LEVEL_WIDTH: usize = 5;

/// Everything needed to render one line
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub logger_name: &'a str,
    pub pid: u32,
    pub timestamp: DateTime<Local>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter {
    palette: Palette,
}

impl LineFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
        timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let timestamp = Self::format_timestamp(&record.timestamp);
        let level = format!("{:>width$}", record.level, width = LEVEL_WIDTH);
        let pid = record.pid.to_string();

        format!(
            "{} {} {} --- {}: {}",
            self.palette.paint(TIMESTAMP_COLOR, &timestamp),
            self.palette.paint(record.level.color_code(), &level),
            self.palette.paint(PID_COLOR, &pid),
            self.palette.paint(NAME_COLOR, record.logger_name),
            record.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 9, 5, 7)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(42)
    }

    fn record(level: LogLevel, message: &str) -> LogRecord<'static> {
        LogRecord {
            level,
            logger_name: "svc",
            pid: 4242,
            timestamp: fixed_timestamp(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_timestamp_zero_padding() {
        assert_eq!(
            LineFormatter::format_timestamp(&fixed_timestamp()),
            "2025-01-08 09:05:07.042"
        );
    }

    #[test]
    fn test_plain_line_shape() {
        let formatter = LineFormatter::new(Palette::plain());
        let line = formatter.format(&record(LogLevel::Info, "hello 42"));
        assert_eq!(line, "2025-01-08 09:05:07.042  INFO 4242 --- svc: hello 42");
    }

    #[test]
    fn test_level_is_right_aligned() {
        let formatter = LineFormatter::default();
        for (level, padded) in [
            (LogLevel::Debug, "DEBUG"),
            (LogLevel::Info, " INFO"),
            (LogLevel::Warn, " WARN"),
            (LogLevel::Error, "ERROR"),
        ] {
            let line = formatter.format(&record(level, "x"));
            assert!(
                line.contains(&format!(".042 {} 4242", padded)),
                "unexpected line: {}",
                line
            );
        }
    }

    #[test]
    fn test_empty_message_keeps_separator() {
        let formatter = LineFormatter::new(Palette::plain());
        let line = formatter.format(&record(LogLevel::Debug, ""));
        assert!(line.ends_with("--- svc: "));
    }

    #[test]
    fn test_colored_line() {
        let formatter = LineFormatter::new(Palette::ansi());
        let line = formatter.format(&record(LogLevel::Error, "boom"));
        assert_eq!(
            line,
            "\x1b[90m2025-01-08 09:05:07.042\x1b[0m \x1b[31mERROR\x1b[0m \
             \x1b[35m4242\x1b[0m --- \x1b[36msvc\x1b[0m: boom"
        );
    }

    #[test]
    fn test_level_colors() {
        let formatter = LineFormatter::new(Palette::ansi());
        let cases = [
            (LogLevel::Debug, "\x1b[34mDEBUG"),
            (LogLevel::Info, "\x1b[32m INFO"),
            (LogLevel::Warn, "\x1b[33m WARN"),
            (LogLevel::Error, "\x1b[31mERROR"),
        ];
        for (level, expected) in cases {
            assert!(formatter.format(&record(level, "x")).contains(expected));
        }
    }
}
