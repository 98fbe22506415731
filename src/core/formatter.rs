//! Rendering of log entries into lines

use super::format_template::{Field, FormatTemplate};
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use colored::Colorize;
use std::sync::Arc;

/// Template and timestamp layout shared by appenders
///
/// # Examples
///
/// ```
/// use basic_logging::core::{Formatter, LogEntry, LogLevel};
///
/// let formatter = Formatter::from_template("%(levelname)s - %(message)s").unwrap();
/// let entry = LogEntry::new(LogLevel::Error, "This is an error message");
/// assert_eq!(formatter.format(&entry), "ERROR - This is an error message");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    template: FormatTemplate,
    timestamp_format: TimestampFormat,
}

impl Formatter {
    pub fn new(template: FormatTemplate, timestamp_format: TimestampFormat) -> Self {
        Self {
            template,
            timestamp_format,
        }
    }

    /// Parse `template` and use the default timestamp layout.
    pub fn from_template(template: &str) -> super::Result<Self> {
        Ok(Self::new(template.parse()?, TimestampFormat::Default))
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn template(&self) -> &FormatTemplate {
        &self.template
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn format(&self, entry: &LogEntry) -> String {
        self.render(entry, false)
    }

    /// Same as [`format`](Self::format) with the level name colored by severity.
    pub fn format_colored(&self, entry: &LogEntry) -> String {
        self.render(entry, true)
    }

    fn render(&self, entry: &LogEntry, colored: bool) -> String {
        let asctime = self
            .template
            .uses_asctime()
            .then(|| self.timestamp_format.format(&entry.timestamp));

        self.template.render(|field| match field {
            Field::AscTime => asctime.clone().unwrap_or_default(),
            Field::LevelName if colored => entry
                .level
                .to_str()
                .color(entry.level.color_code())
                .to_string(),
            Field::LevelName => entry.level.to_str().to_string(),
            Field::LevelNo => entry.level.as_u8().to_string(),
            Field::Message => entry.message.clone(),
            Field::Name => entry.logger_name.clone(),
            Field::Thread => entry.thread_id.clone(),
            Field::ThreadName => entry.thread_label().to_string(),
        })
    }

    /// Wrap this formatter in an Arc for sharing across appenders
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
