//! Basic logger usage example
//!
//! Demonstrates named loggers, level filtering and argument serialization.
//!
//! Run with: cargo run --example basic_usage
//! Try `LOG_LEVEL=WARN` or `NO_COLOR=1` to see configuration at work.

use rust_console_logger::prelude::*;
use rust_console_logger::{error, info, log, warn};

fn main() -> Result<()> {
    // The default registry is built from the environment on first use
    let root = root_logger();
    info!(root, "Root logger ready:", root.name());

    // 1. Loggers at the global level
    let http = get_logger("http", None);
    http.debug(&[LogValue::from("connection pool warmed up")]);
    info!(http, "listening on port", 8080);

    // 2. A quieter logger; the first requested level sticks
    let db = get_logger("db", Some(LogLevel::Warn));
    info!(db, "hidden: below WARN");
    warn!(db, "slow query took", 1.8, "seconds");
    let same_db = get_logger("db", Some(LogLevel::Debug));
    info!(same_db, "still hidden, level is", same_db.level().to_str());

    // 3. Structured values and errors
    let request = serde_json::json!({"method": "GET", "path": "/health"});
    info!(http, "request", request);

    let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer went away");
    error!(http, "request failed", LogValue::error(&err));

    // 4. Unknown level names are reported instead of logged
    log!(http, "VERBOSE", "never printed");

    rust_console_logger::registry().flush()
}
