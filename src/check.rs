//! Error-check helpers
//!
//! Unwrap a `Result`, reporting the failure through the default logger first.
//! [`check`] panics on error; [`check_or_exit`] terminates the process the way
//! [`Logger::fatal`](crate::Logger::fatal) does.

use crate::core::{CallerLocation, LogLevel};
use crate::global::default_logger;
use std::fmt;

/// Path of this file as reported by `Location::caller()`.
pub(crate) const SOURCE_FILE: &str = file!();

/// Return the `Ok` value, or log `"<msg>: <err>"` at `ERROR` and panic.
///
/// # Example
///
/// ```
/// let port: u16 = tripwire::check("8080".parse::<u16>(), "invalid port");
/// assert_eq!(port, 8080);
/// ```
#[track_caller]
pub fn check<T, E: fmt::Display>(result: Result<T, E>, msg: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            let report = format!("{}: {}", msg, err);
            default_logger().emit(LogLevel::Error, &report, CallerLocation::capture());
            panic!("{}", report)
        }
    }
}

/// Return the `Ok` value, or log `"<msg>: <err>"` at `FATAL` and exit with status 1.
#[track_caller]
pub fn check_or_exit<T, E: fmt::Display>(result: Result<T, E>, msg: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => default_logger().fatal(format_args!("{}: {}", msg, err)),
    }
}
