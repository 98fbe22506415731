//! Console appender implementation

use crate::core::{Appender, Formatter, LogEntry, LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;

/// Which standard stream the console appender writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    Stdout,
    #[default]
    Stderr,
}

/// Writes formatted entries to stderr (default) or stdout
///
/// All levels go to the same stream so lines keep their call order.
pub struct ConsoleAppender {
    stream: ConsoleStream,
    use_colors: bool,
    formatter: Arc<Formatter>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stream: ConsoleStream::default(),
            use_colors: false,
            formatter: Formatter::default().shared(),
        }
    }

    pub fn stdout() -> Self {
        Self::new().with_stream(ConsoleStream::Stdout)
    }

    #[must_use]
    pub fn with_stream(mut self, stream: ConsoleStream) -> Self {
        self.stream = stream;
        self
    }

    /// Color the level name by severity
    ///
    /// # Example
    ///
    /// ```
    /// use basic_logging::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new().with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    fn render(&self, entry: &LogEntry) -> String {
        if self.use_colors {
            self.formatter.format_colored(entry)
        } else {
            self.formatter.format(entry)
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.render(entry);
        let result = match self.stream {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
        result.map_err(|e| LoggerError::io_operation("writing to console", "console write failed", e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_defaults_to_stderr_without_colors() {
        let appender = ConsoleAppender::new();
        assert_eq!(appender.stream(), ConsoleStream::Stderr);
        let entry = LogEntry::new(LogLevel::Info, "plain");
        assert_eq!(appender.render(&entry), "INFO:root:plain");
    }

    #[test]
    fn test_stdout_constructor() {
        assert_eq!(ConsoleAppender::stdout().stream(), ConsoleStream::Stdout);
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::new();
        appender
            .append(&LogEntry::new(LogLevel::Warning, "console test"))
            .expect("append");
        appender.flush().expect("flush");
    }

    #[test]
    fn test_stream_serde() {
        let stream: ConsoleStream = serde_json::from_str("\"stdout\"").expect("deserialize");
        assert_eq!(stream, ConsoleStream::Stdout);
    }
}
