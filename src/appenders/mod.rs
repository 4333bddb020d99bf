//! Appender implementations

pub mod console;
pub mod memory;

pub use console::ConsoleAppender;
pub use memory::MemoryAppender;

// Re-export the trait so appender authors need a single import
pub use crate::core::{Appender, OutputTarget};
