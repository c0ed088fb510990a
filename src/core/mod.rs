//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod style;
pub mod timestamp;

pub use caller::CallerLocation;
pub use config::{LoggerBuilder, LoggerConfig};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, FATAL_EXIT_CODE, FORMAT_ERROR};
pub use sink::{BufferSink, Sink};
#[cfg(feature = "console")]
pub use style::AnsiStyler;
pub use style::{ColorMode, PlainStyler, Styler};
pub use timestamp::TimestampFormat;
