//! Process-wide root logger
//!
//! The root starts out unconfigured. [`basic_config`] installs it once;
//! later calls are ignored unless the configuration sets `force`. Emitting
//! through [`root`] or the free functions on an unconfigured process
//! installs [`BasicConfig::default`] first.

use crate::config::BasicConfig;
use crate::core::{LogLevel, Logger, Result};
use parking_lot::RwLock;
use std::sync::Arc;

static ROOT: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);

/// Configure the root logger.
///
/// Returns `Ok(true)` if this call installed the root, `Ok(false)` if a
/// root was already configured and `config.force` is not set. Template,
/// date layout and destination are validated before anything is replaced.
pub fn basic_config(config: BasicConfig) -> Result<bool> {
    if !config.force && ROOT.read().is_some() {
        return Ok(false);
    }

    let logger = Arc::new(config.build_logger()?);

    let mut root = ROOT.write();
    if root.is_some() && !config.force {
        // Lost a race with another first-time configuration.
        return Ok(false);
    }
    if let Some(previous) = root.replace(logger) {
        if let Err(e) = previous.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush replaced root logger: {}", e);
        }
    }
    Ok(true)
}

pub fn is_configured() -> bool {
    ROOT.read().is_some()
}

/// The root logger, installing the default configuration if needed.
pub fn root() -> Arc<Logger> {
    if let Some(logger) = ROOT.read().as_ref() {
        return Arc::clone(logger);
    }

    let mut root = ROOT.write();
    if let Some(logger) = root.as_ref() {
        return Arc::clone(logger);
    }
    let logger = Arc::new(default_logger());
    *root = Some(Arc::clone(&logger));
    logger
}

fn default_logger() -> Logger {
    BasicConfig::default().build_logger().unwrap_or_else(|e| {
        eprintln!("[LOGGER ERROR] Default configuration failed: {}", e);
        Logger::new()
    })
}

/// Flush the root logger's appenders, if a root is installed.
pub fn shutdown() -> Result<()> {
    let logger = ROOT.read().clone();
    match logger {
        Some(logger) => logger.flush(),
        None => Ok(()),
    }
}

pub fn log(level: LogLevel, message: impl AsRef<str>) {
    root().log(level, message);
}

pub fn debug(message: impl AsRef<str>) {
    root().debug(message);
}

pub fn info(message: impl AsRef<str>) {
    root().info(message);
}

pub fn warning(message: impl AsRef<str>) {
    root().warning(message);
}

pub fn error(message: impl AsRef<str>) {
    root().error(message);
}

pub fn critical(message: impl AsRef<str>) {
    root().critical(message);
}

#[cfg(test)]
pub(crate) fn reset_for_tests() {
    ROOT.write().take();
}
