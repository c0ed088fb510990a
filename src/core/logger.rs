//! Main logger implementation

use super::{
    caller::CallerLocation,
    config::{LoggerBuilder, LoggerConfig},
    error::Result,
    log_level::LogLevel,
    sink::Sink,
    style::{self, ColorMode, Styler},
    timestamp::TimestampFormat,
};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fmt::{self, Write};
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};

/// Path of this file as reported by `Location::caller()`.
pub(crate) const SOURCE_FILE: &str = file!();

/// Inline marker for a message whose `Display` impl reported an error.
pub const FORMAT_ERROR: &str = "%!(FORMAT ERROR)";

/// Exit status used by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

struct LoggerState {
    sink: Sink,
    show_caller: bool,
    color_mode: ColorMode,
    styler: Option<Box<dyn Styler>>,
    timestamp_format: TimestampFormat,
}

impl LoggerState {
    fn styler(&self) -> &dyn Styler {
        match self.styler {
            Some(ref custom) => custom.as_ref(),
            None => style::for_mode(self.color_mode, self.sink.is_terminal()),
        }
    }

    fn render(
        &self,
        level: LogLevel,
        message: &dyn fmt::Display,
        caller: CallerLocation,
        now: &DateTime<Local>,
    ) -> String {
        let styler = self.styler();
        let mut line = String::with_capacity(96);

        line.push_str(&styler.timestamp(&format!("[{}]", self.timestamp_format.format(now))));
        line.push(' ');
        line.push_str(&styler.level(level, level.label()));
        line.push(' ');

        if self.show_caller {
            if let Some(caller) = caller.external() {
                line.push_str(&styler.caller(&format!("({})", caller)));
                line.push(' ');
            }
        }

        line.push_str(&styler.message(&render_message(message)));
        line.push('\n');
        line
    }

    /// Sink errors are dropped: emission has no error channel.
    fn write_event(&mut self, level: LogLevel, message: &dyn fmt::Display, caller: CallerLocation) {
        let line = self.render(level, message, caller, &Local::now());
        let _ = self.sink.write_line(line.as_bytes());
    }
}

fn render_message(message: &dyn fmt::Display) -> String {
    let mut out = String::new();
    if write!(out, "{}", message).is_err() {
        out.push_str(FORMAT_ERROR);
    }
    out
}

/// Leveled console logger.
///
/// Every emission formats and writes a single line while holding one mutex, so
/// lines from concurrent callers never interleave. Events below the minimum
/// level return before the lock is touched.
///
/// # Example
///
/// ```
/// use tripwire::{BufferSink, Logger, LogLevel};
///
/// let buffer = BufferSink::new();
/// let logger = Logger::new();
/// logger.set_output(buffer.clone());
/// logger.set_level(LogLevel::Warn);
///
/// logger.info("dropped");
/// logger.warn(format_args!("disk at {}%", 91));
///
/// let lines = buffer.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].contains("WARN "));
/// assert!(lines[0].ends_with("disk at 91%"));
/// ```
pub struct Logger {
    /// Mirror of the threshold for the lock-free filter; only written under `state`.
    min_level: AtomicU8,
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Logger writing to stdout at `Info` with caller display on.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&LoggerConfig::default())
    }

    /// Logger writing to stdout with the given settings.
    ///
    /// Use [`Logger::builder`] to choose a different sink or a custom styler.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::from_parts(config.clone(), Sink::stdout(), None)
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(
        config: LoggerConfig,
        sink: Sink,
        styler: Option<Box<dyn Styler>>,
    ) -> Self {
        Self {
            min_level: AtomicU8::new(config.level as u8),
            state: Mutex::new(LoggerState {
                sink,
                show_caller: config.show_caller,
                color_mode: config.color_mode,
                styler,
                timestamp_format: config.timestamp_format,
            }),
        }
    }

    /// Set the minimum level that is written.
    ///
    /// Takes the emission lock, so a line already being written finishes under
    /// the old threshold and every later line sees the new one.
    pub fn set_level(&self, level: LogLevel) {
        let _state = self.state.lock();
        self.min_level.store(level as u8, Ordering::Release);
    }

    /// Redirect output. The previous sink is dropped, closing it if it owns a file.
    ///
    /// With [`ColorMode::Auto`] the new sink's terminal flag decides coloring.
    pub fn set_output(&self, sink: impl Into<Sink>) {
        let sink = sink.into();
        self.state.lock().sink = sink;
    }

    /// Enable or disable the `(dir/file.rs:line)` segment
    pub fn set_show_caller(&self, show: bool) {
        self.state.lock().show_caller = show;
    }

    pub fn set_color_mode(&self, mode: ColorMode) {
        self.state.lock().color_mode = mode;
    }

    /// Replace the styling strategy; overrides the color mode until cleared.
    pub fn set_styler<S: Styler + 'static>(&self, styler: S) {
        self.state.lock().styler = Some(Box::new(styler));
    }

    /// Go back to the styler chosen by the color mode
    pub fn clear_styler(&self) {
        self.state.lock().styler = None;
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.state.lock().timestamp_format = format;
    }

    /// Current minimum level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Acquire))
    }

    pub fn show_caller(&self) -> bool {
        self.state.lock().show_caller
    }

    pub fn color_mode(&self) -> ColorMode {
        self.state.lock().color_mode
    }

    /// Snapshot of the serializable settings
    pub fn config(&self) -> LoggerConfig {
        let state = self.state.lock();
        LoggerConfig {
            level: self.level(),
            show_caller: state.show_caller,
            color_mode: state.color_mode,
            timestamp_format: state.timestamp_format.clone(),
        }
    }

    /// Whether an event at `level` would be written right now
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Flush the sink.
    ///
    /// Every line is already flushed as it is written; this is for callers that
    /// want to observe a sink error, which emission itself never reports.
    pub fn flush(&self) -> Result<()> {
        self.state.lock().sink.flush()
    }

    /// Log at an explicit level. The call site is recorded as the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use tripwire::{BufferSink, Logger, LogLevel};
    ///
    /// let buffer = BufferSink::new();
    /// let logger = Logger::builder().output(buffer.clone()).build();
    /// logger.log(LogLevel::Error, format_args!("code {}", 503));
    /// assert!(buffer.contents().ends_with("code 503\n"));
    /// ```
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.emit(level, &message, CallerLocation::capture());
    }

    /// Log at `Debug`. Nothing is formatted when the level is filtered out.
    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Debug, &message, CallerLocation::capture());
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Info, &message, CallerLocation::capture());
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Warn, &message, CallerLocation::capture());
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(LogLevel::Error, &message, CallerLocation::capture());
    }

    /// Write a `FATAL` line, flush, and exit the process with status 1.
    ///
    /// The lock is held through the exit, so no other caller can be midway
    /// through a line when the process ends.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        let caller = CallerLocation::capture();
        let mut state = self.state.lock();
        state.write_event(LogLevel::Fatal, &message, caller);
        let _ = state.sink.flush();
        process::exit(FATAL_EXIT_CODE)
    }

    /// Shared emission path. `caller` must be captured at the public boundary.
    pub(crate) fn emit(&self, level: LogLevel, message: &dyn fmt::Display, caller: CallerLocation) {
        if !self.is_enabled(level) {
            return;
        }

        let mut state = self.state.lock();
        // The threshold may have been raised while we waited for the lock.
        if !self.is_enabled(level) {
            return;
        }
        state.write_event(level, message, caller);
    }

    #[cfg(test)]
    fn render_at(
        &self,
        level: LogLevel,
        message: &dyn fmt::Display,
        caller: CallerLocation,
        now: &DateTime<Local>,
    ) -> String {
        self.state.lock().render(level, message, caller, now)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sink", &state.sink)
            .field("show_caller", &state.show_caller)
            .field("color_mode", &state.color_mode)
            .field("custom_styler", &state.styler.is_some())
            .finish()
    }
}
