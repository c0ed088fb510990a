//! # Tripwire
//!
//! A leveled, caller-aware console logger.
//!
//! ## Features
//!
//! - **Leveled**: `DEBUG < INFO < WARN < ERROR < FATAL`, filtered before any formatting
//! - **Caller Aware**: each line names the `dir/file.rs:line` that logged it
//! - **Thread Safe**: one mutex serializes each line, so output never interleaves
//! - **Terminal Friendly**: colors on terminals, plain text for files and pipes
//!
//! ```
//! use tripwire::prelude::*;
//!
//! let buffer = BufferSink::new();
//! let logger = Logger::builder().output(buffer.clone()).show_caller(false).build();
//! tripwire::info!(logger, "user {} logged in", "alice");
//! assert!(buffer.contents().ends_with("INFO  user alice logged in\n"));
//! ```

pub mod check;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::check::{check, check_or_exit};
    pub use crate::core::{
        BufferSink, CallerLocation, ColorMode, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, PlainStyler, Result, Sink, Styler, TimestampFormat,
    };
    #[cfg(feature = "console")]
    pub use crate::core::AnsiStyler;
    pub use crate::global::default_logger;
}

pub use check::{check, check_or_exit};
#[cfg(feature = "console")]
pub use crate::core::AnsiStyler;
pub use crate::core::{
    BufferSink, CallerLocation, ColorMode, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, PlainStyler, Result, Sink, Styler, TimestampFormat, FATAL_EXIT_CODE,
    FORMAT_ERROR,
};
pub use global::default_logger;
