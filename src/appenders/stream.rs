//! Appender over any `Write` implementation

use crate::core::{Appender, Formatter, LogEntry, LoggerError, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Writes one formatted line per entry to a writer
///
/// # Examples
///
/// ```
/// use basic_logging::appenders::{SharedBuffer, StreamAppender};
/// use basic_logging::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(StreamAppender::new(buffer.clone()))
///     .build();
///
/// logger.error("This is an error message");
/// assert_eq!(buffer.lines(), vec!["ERROR:root:This is an error message"]);
/// ```
pub struct StreamAppender<W: Write + Send + Sync> {
    writer: W,
    formatter: Arc<Formatter>,
}

impl<W: Write + Send + Sync> StreamAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            formatter: Formatter::default().shared(),
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> Appender for StreamAppender<W> {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        writeln!(self.writer, "{}", line)
            .map_err(|e| LoggerError::io_operation("writing log line", "stream write failed", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stream"
    }
}

/// In-memory, cloneable writer for capturing log output
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
