//! The five sample calls emitted by the `basic_logging` binary

use crate::config::BasicConfig;
use crate::core::{LogLevel, Logger};

/// Template used by the binary.
pub const DEMO_FORMAT: &str = "%(asctime)s - %(levelname)s - %(message)s";

/// Sample messages in emission order.
pub const SAMPLES: [(LogLevel, &str); 5] = [
    (LogLevel::Debug, "This is a debug message"),
    (LogLevel::Info, "This is an info message"),
    (LogLevel::Warning, "This is a warning message"),
    (LogLevel::Error, "This is an error message"),
    (LogLevel::Critical, "This is a critical message"),
];

/// Configuration the binary installs: everything from DEBUG up, timestamped.
pub fn demo_config() -> BasicConfig {
    BasicConfig::new().level(LogLevel::Debug).format(DEMO_FORMAT)
}

/// Emit one sample per level, lowest first.
pub fn emit_samples(logger: &Logger) {
    for (level, message) in SAMPLES {
        logger.log(level, message);
    }
}
