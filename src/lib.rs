//! # Basic Logging
//!
//! One-shot configuration of a process-wide logger, leveled emitters and
//! console/file output.
//!
//! ```
//! use basic_logging::{basic_config, root, BasicConfig, LogLevel};
//!
//! basic_config(
//!     BasicConfig::new()
//!         .level(LogLevel::Debug)
//!         .format("%(asctime)s - %(levelname)s - %(message)s"),
//! )
//! .unwrap();
//!
//! root().error("This is an error message");
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod demo;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{
        ConsoleAppender, ConsoleStream, FileAppender, FileMode, SharedBuffer, StreamAppender,
    };
    pub use crate::config::BasicConfig;
    pub use crate::core::{
        Appender, FormatTemplate, Formatter, LogEntry, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
    pub use crate::global::{basic_config, root};
}

pub use crate::appenders::{ConsoleAppender, FileAppender, StreamAppender};
pub use crate::config::BasicConfig;
pub use crate::core::{
    Appender, FormatTemplate, Formatter, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Result, TimestampFormat,
};
pub use crate::global::{basic_config, is_configured, root, shutdown};
