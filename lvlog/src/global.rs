//! # Process-wide Logger
//!
//! One lazily created [`Logger`] (stdout, threshold `Debug`) plus free
//! functions forwarding to it. Components that want isolation can build
//! their own `Logger` and pass it around instead.

use crate::config::LogConfig;
use crate::error::LogError;
use crate::level::Severity;
use crate::location::Location;
use crate::logger::Logger;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::stdout)
}

/// Apply a loaded config to the process-wide logger.
pub fn init(config: &LogConfig) -> Result<&'static Logger, LogError> {
    let logger = global();
    if let Some(path) = &config.file {
        logger.redirect(path)?;
    }
    logger.set_level(config.level);
    Ok(logger)
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    global().log(Severity::Debug, Location::caller(), args);
}

#[track_caller]
pub fn notice(args: fmt::Arguments<'_>) {
    global().log(Severity::Notice, Location::caller(), args);
}

#[track_caller]
pub fn warning(args: fmt::Arguments<'_>) {
    global().log(Severity::Warning, Location::caller(), args);
}

#[track_caller]
pub fn fatal(args: fmt::Arguments<'_>) {
    global().log(Severity::Fatal, Location::caller(), args);
}

pub fn set_log_level(level: Severity) {
    global().set_level(level);
}

/// Redirect the process-wide logger to `path` (append, create).
pub fn open_log(path: impl AsRef<Path>) -> Result<(), LogError> {
    global().redirect(path).map(drop)
}

/// Release the process-wide sink.
pub fn close() -> Result<(), LogError> {
    global().close()
}
