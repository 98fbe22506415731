//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod format_template;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use format_template::{Field, FormatTemplate, DEFAULT_TEMPLATE};
pub use formatter::Formatter;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, ROOT_LOGGER_NAME};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
