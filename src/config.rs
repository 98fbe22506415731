//! One-shot logging configuration
//!
//! [`BasicConfig`] describes the root logger: threshold, line template,
//! timestamp layout and destination. It can be built fluently or read from
//! JSON, and turns into a ready [`Logger`] with [`BasicConfig::build_logger`].

use crate::appenders::{ConsoleAppender, ConsoleStream, FileAppender, FileMode};
use crate::core::{
    Formatter, FormatTemplate, LogLevel, Logger, LoggerError, Result, TimestampFormat,
    DEFAULT_TEMPLATE, ROOT_LOGGER_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of the root logger
///
/// # Examples
///
/// ```
/// use basic_logging::{BasicConfig, LogLevel};
///
/// let config = BasicConfig::new()
///     .level(LogLevel::Debug)
///     .format("%(asctime)s - %(levelname)s - %(message)s");
/// let logger = config.build_logger().unwrap();
/// assert_eq!(logger.min_level(), LogLevel::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BasicConfig {
    pub level: LogLevel,
    pub format: String,
    pub datefmt: Option<String>,
    pub filename: Option<PathBuf>,
    pub filemode: FileMode,
    /// Console stream; `None` means stderr. Cannot be combined with `filename`.
    pub stream: Option<ConsoleStream>,
    /// Colored level names on the console. Cannot be combined with `filename`.
    pub colors: bool,
    pub force: bool,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: DEFAULT_TEMPLATE.to_string(),
            datefmt: None,
            filename: None,
            filemode: FileMode::default(),
            stream: None,
            colors: false,
            force: false,
        }
    }
}

impl BasicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use basic_logging::{BasicConfig, LogLevel};
    ///
    /// let config = BasicConfig::from_json(r#"{"level": "ERROR", "filemode": "truncate"}"#).unwrap();
    /// assert_eq!(config.level, LogLevel::Error);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = template.into();
        self
    }

    #[must_use]
    pub fn datefmt(mut self, layout: impl Into<String>) -> Self {
        self.datefmt = Some(layout.into());
        self
    }

    /// Write to a file instead of the console
    ///
    /// Mutually exclusive with [`stream`](Self::stream) and
    /// [`colors`](Self::colors); [`build_logger`](Self::build_logger)
    /// rejects the combination.
    #[must_use]
    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.filename = Some(path.into());
        self
    }

    #[must_use]
    pub fn filemode(mut self, mode: FileMode) -> Self {
        self.filemode = mode;
        self
    }

    #[must_use]
    pub fn stream(mut self, stream: ConsoleStream) -> Self {
        self.stream = Some(stream);
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Replace an already installed root logger
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn formatter(&self) -> Result<Formatter> {
        let template: FormatTemplate = self.format.parse()?;
        let timestamp_format = TimestampFormat::from(self.datefmt.clone());
        timestamp_format.validate()?;
        Ok(Formatter::new(template, timestamp_format))
    }

    /// Validate the configuration and open its destination.
    pub fn build_logger(&self) -> Result<Logger> {
        if self.filename.is_some() {
            if self.stream.is_some() {
                return Err(LoggerError::config(
                    "BasicConfig",
                    "'stream' and 'filename' should not be specified together",
                ));
            }
            if self.colors {
                return Err(LoggerError::config(
                    "BasicConfig",
                    "'colors' only applies to console output, not 'filename'",
                ));
            }
        }

        let formatter = self.formatter()?.shared();

        let builder = Logger::builder()
            .name(ROOT_LOGGER_NAME)
            .min_level(self.level);

        let builder = match &self.filename {
            Some(path) if path.as_os_str().is_empty() => {
                return Err(LoggerError::config("BasicConfig", "filename is empty"));
            }
            Some(path) => builder.appender(
                FileAppender::with_mode(path.clone(), self.filemode)?.with_formatter(formatter),
            ),
            None => builder.appender(
                ConsoleAppender::new()
                    .with_stream(self.stream.unwrap_or_default())
                    .with_colors(self.colors)
                    .with_formatter(formatter),
            ),
        };

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BasicConfig::default();
        assert_eq!(config.level, LogLevel::Warning);
        assert_eq!(config.format, "%(levelname)s:%(name)s:%(message)s");
        assert_eq!(config.stream, None);
        assert_eq!(config.filemode, FileMode::Append);
        assert!(!config.force);
    }

    #[test]
    fn test_from_json_partial() {
        let config = BasicConfig::from_json(
            r#"{"level": "DEBUG", "format": "%(message)s", "stream": "stdout", "force": true}"#,
        )
        .expect("valid json");
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, "%(message)s");
        assert_eq!(config.stream, Some(ConsoleStream::Stdout));
        assert!(config.force);
        assert_eq!(config.datefmt, None);
    }

    #[test]
    fn test_from_json_accepts_level_spellings() {
        for (json, expected) in [
            (r#"{"level": "warn"}"#, LogLevel::Warning),
            (r#"{"level": "debug"}"#, LogLevel::Debug),
            (r#"{"level": 10}"#, LogLevel::Debug),
            (r#"{"level": "FATAL"}"#, LogLevel::Critical),
            (r#"{"level": "40"}"#, LogLevel::Error),
        ] {
            let config = BasicConfig::from_json(json).expect(json);
            assert_eq!(config.level, expected, "{}", json);
        }

        let err = BasicConfig::from_json(r#"{"level": 25}"#).expect_err("no level 25");
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = BasicConfig::from_json(r#"{"levle": "DEBUG"}"#).expect_err("typo field");
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_bad_template_is_rejected() {
        let err = BasicConfig::new()
            .format("%(asctime)s %(user)s")
            .build_logger()
            .expect_err("unknown placeholder");
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }

    #[test]
    fn test_bad_datefmt_is_rejected() {
        let err = BasicConfig::new()
            .datefmt("%Y-%!")
            .build_logger()
            .expect_err("invalid datefmt");
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        let err = BasicConfig::new()
            .filename("")
            .build_logger()
            .expect_err("empty filename");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_filename_excludes_console_settings() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("basic.log");

        let err = BasicConfig::new()
            .filename(&path)
            .stream(ConsoleStream::Stderr)
            .build_logger()
            .expect_err("stream with filename");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("'stream' and 'filename'"));

        let err = BasicConfig::new()
            .filename(&path)
            .colors(true)
            .build_logger()
            .expect_err("colors with filename");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = BasicConfig::from_json(&format!(
            r#"{{"filename": {:?}, "stream": "stdout"}}"#,
            path.display().to_string()
        ))
        .expect("valid json")
        .build_logger()
        .expect_err("stream with filename from json");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_file_destination() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("basic.log");

        let logger = BasicConfig::new()
            .level(LogLevel::Info)
            .format("%(levelname)s - %(message)s")
            .filename(&path)
            .build_logger()
            .expect("valid config");
        logger.debug("skipped");
        logger.info("kept");
        logger.flush().expect("flush");

        assert_eq!(fs::read_to_string(&path).expect("read log"), "INFO - kept\n");
    }
}
