//! Process-wide default logger
//!
//! The default instance is built on first use through a one-time initializer
//! and lives until the process exits. Prefer passing a [`Logger`] explicitly
//! where a component owns its logging; these functions exist for binaries and
//! scripts that want a single shared console logger.

use crate::core::{CallerLocation, ColorMode, LogLevel, Logger, Sink};
use once_cell::sync::Lazy;
use std::fmt;

/// Path of this file as reported by `Location::caller()`.
pub(crate) const SOURCE_FILE: &str = file!();

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// The shared default logger
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

pub fn set_level(level: LogLevel) {
    DEFAULT_LOGGER.set_level(level);
}

pub fn set_output(sink: impl Into<Sink>) {
    DEFAULT_LOGGER.set_output(sink);
}

pub fn set_show_caller(show: bool) {
    DEFAULT_LOGGER.set_show_caller(show);
}

pub fn set_color_mode(mode: ColorMode) {
    DEFAULT_LOGGER.set_color_mode(mode);
}

#[track_caller]
pub fn log(level: LogLevel, message: impl fmt::Display) {
    DEFAULT_LOGGER.emit(level, &message, CallerLocation::capture());
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    DEFAULT_LOGGER.emit(LogLevel::Debug, &message, CallerLocation::capture());
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    DEFAULT_LOGGER.emit(LogLevel::Info, &message, CallerLocation::capture());
}

#[track_caller]
pub fn warn(message: impl fmt::Display) {
    DEFAULT_LOGGER.emit(LogLevel::Warn, &message, CallerLocation::capture());
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    DEFAULT_LOGGER.emit(LogLevel::Error, &message, CallerLocation::capture());
}

/// Log at `FATAL` through the default logger and exit with status 1.
#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    DEFAULT_LOGGER.fatal(message)
}
