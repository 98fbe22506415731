//! File appender implementation

use crate::core::{Appender, Formatter, LogEntry, LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How an existing log file is treated when opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    /// Keep existing content and write after it
    #[default]
    Append,
    /// Discard existing content
    Truncate,
}

pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    formatter: Arc<Formatter>,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_mode(path, FileMode::Append)
    }

    pub fn with_mode(path: impl Into<PathBuf>, mode: FileMode) -> Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            FileMode::Append => options.append(true),
            FileMode::Truncate => options.write(true).truncate(true),
        };

        let file = options.open(&path).map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}'", path.display()),
                e,
            )
        })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            formatter: Formatter::default().shared(),
        })
    }

    /// Set the formatter for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use basic_logging::appenders::FileAppender;
    /// use basic_logging::Formatter;
    ///
    /// let formatter = Formatter::from_template("%(asctime)s %(message)s").unwrap();
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_formatter(formatter.shared());
    /// ```
    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let mut output = self.formatter.format(entry);
        output.push('\n');

        writer.write_all(output.as_bytes()).map_err(|e| {
            LoggerError::file_appender(self.path.display().to_string(), e.to_string())
        })
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_mode_keeps_content() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").expect("seed file");

        {
            let mut appender = FileAppender::new(&path).expect("open");
            appender
                .append(&LogEntry::new(LogLevel::Info, "added"))
                .expect("append");
        }

        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content, "existing\nINFO:root:added\n");
    }

    #[test]
    fn test_truncate_mode_discards_content() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("app.log");
        fs::write(&path, "old line\n").expect("seed file");

        let mut appender = FileAppender::with_mode(&path, FileMode::Truncate).expect("open");
        appender
            .append(&LogEntry::new(LogLevel::Error, "fresh"))
            .expect("append");
        appender.flush().expect("flush");

        assert_eq!(appender.path(), path.as_path());
        let content = fs::read_to_string(&path).expect("read log");
        assert_eq!(content, "ERROR:root:fresh\n");
    }

    #[test]
    fn test_open_failure_names_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("app.log");
        let err = FileAppender::new(&path).err().expect("open should fail");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("app.log"));
    }
}
