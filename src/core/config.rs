//! Logger configuration
//!
//! [`LoggerConfig`] is the serializable subset of a logger's settings, suitable
//! for loading from an application's own config file. [`LoggerBuilder`] adds the
//! parts that cannot be serialized: the sink and a custom styler.

use super::{
    log_level::LogLevel,
    logger::Logger,
    sink::Sink,
    style::{ColorMode, Styler},
    timestamp::TimestampFormat,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level that is written
    pub level: LogLevel,
    /// Whether to annotate lines with the call site
    pub show_caller: bool,
    pub color_mode: ColorMode,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            show_caller: true,
            color_mode: ColorMode::Auto,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use tripwire::prelude::*;
///
/// let buffer = BufferSink::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .output(buffer.clone())
///     .show_caller(false)
///     .color_mode(ColorMode::Never)
///     .build();
///
/// logger.debug("visible");
/// assert_eq!(buffer.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    output: Option<Sink>,
    styler: Option<Box<dyn Styler>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            output: None,
            styler: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Set the destination; stdout when not called
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, sink: impl Into<Sink>) -> Self {
        self.output = Some(sink.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_caller(mut self, show: bool) -> Self {
        self.config.show_caller = show;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.config.color_mode = mode;
        self
    }

    /// Install a custom styler; takes precedence over the color mode
    #[must_use = "builder methods return a new value"]
    pub fn styler<S: Styler + 'static>(mut self, styler: S) -> Self {
        self.styler = Some(Box::new(styler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger::from_parts(
            self.config,
            self.output.unwrap_or_default(),
            self.styler,
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
