//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A destination for rendered log records.
///
/// Appenders render entries themselves, usually through a shared
/// [`Formatter`](super::Formatter), and write one line per entry.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
