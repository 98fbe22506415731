//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes a logger expression followed by `format!` arguments.
//! Use [`root()`](crate::root) as the logger to go through the process-wide
//! root.
//!
//! # Examples
//!
//! ```
//! use basic_logging::prelude::*;
//! use basic_logging::{error, info};
//!
//! let logger = Logger::builder().min_level(LogLevel::Debug).build();
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! error!(logger, "Cannot bind port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use basic_logging::prelude::*;
/// # let logger = Logger::new();
/// use basic_logging::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let level = $level;
        let logger = &$logger;
        if logger.is_enabled_for(level) {
            logger.log(level, format!($($arg)+));
        } else {
            logger.metrics().record_filtered();
        }
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use basic_logging::prelude::*;
/// use basic_logging::warning;
/// warning!(basic_logging::root(), "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
