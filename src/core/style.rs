//! Line styling strategies
//!
//! A [`Styler`] decorates each segment of a log line. [`AnsiStyler`] colors
//! segments for terminals; [`PlainStyler`] leaves them untouched for files,
//! pipes and in-memory buffers.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decorates the individual segments of a log line.
pub trait Styler: Send + Sync {
    fn timestamp(&self, text: &str) -> String;
    fn level(&self, level: LogLevel, text: &str) -> String;
    fn caller(&self, text: &str) -> String;
    fn message(&self, text: &str) -> String;
}

/// When to apply ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when the sink is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn use_color(&self, sink_is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => sink_is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn timestamp(&self, text: &str) -> String {
        text.to_string()
    }

    fn level(&self, _level: LogLevel, text: &str) -> String {
        text.to_string()
    }

    fn caller(&self, text: &str) -> String {
        text.to_string()
    }

    fn message(&self, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI styling using `colored`'s color table.
///
/// Escape sequences are assembled here rather than through `Colorize`, whose
/// output is gated on whether the process's stdout is a terminal. Whether a
/// line is colored is decided only by [`ColorMode`] and the sink.
#[cfg(feature = "console")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

#[cfg(feature = "console")]
impl AnsiStyler {
    const BOLD: &'static str = "1";
    const DIM: &'static str = "2";
    const ITALIC: &'static str = "3";
    const RESET: &'static str = "\x1b[0m";

    pub fn level_color(level: LogLevel) -> colored::Color {
        use colored::Color::*;
        match level {
            LogLevel::Debug => BrightCyan,
            LogLevel::Info => BrightGreen,
            LogLevel::Warn => BrightYellow,
            LogLevel::Error => BrightRed,
            LogLevel::Fatal => BrightMagenta,
        }
    }

    /// Wrap `text` in a single SGR sequence: attributes, then foreground, then background.
    pub fn paint(
        text: &str,
        attrs: &[&str],
        fg: colored::Color,
        bg: Option<colored::Color>,
    ) -> String {
        let mut codes: Vec<String> = attrs.iter().map(|a| a.to_string()).collect();
        codes.push(fg.to_fg_str().to_string());
        if let Some(bg) = bg {
            codes.push(bg.to_bg_str().to_string());
        }
        format!("\x1b[{}m{}{}", codes.join(";"), text, Self::RESET)
    }
}

#[cfg(feature = "console")]
impl Styler for AnsiStyler {
    fn timestamp(&self, text: &str) -> String {
        Self::paint(text, &[Self::DIM], colored::Color::BrightWhite, None)
    }

    fn level(&self, level: LogLevel, text: &str) -> String {
        let bg = match level {
            LogLevel::Fatal => Some(colored::Color::Black),
            _ => None,
        };
        Self::paint(text, &[Self::BOLD], Self::level_color(level), bg)
    }

    fn caller(&self, text: &str) -> String {
        Self::paint(text, &[Self::ITALIC], colored::Color::BrightBlue, None)
    }

    fn message(&self, text: &str) -> String {
        Self::paint(text, &[], colored::Color::BrightWhite, None)
    }
}

/// Styler used for a sink when no custom styler is installed.
pub(crate) fn for_mode(mode: ColorMode, sink_is_terminal: bool) -> &'static dyn Styler {
    #[cfg(feature = "console")]
    {
        if mode.use_color(sink_is_terminal) {
            return &AnsiStyler;
        }
    }
    #[cfg(not(feature = "console"))]
    let _ = (mode, sink_is_terminal);

    &PlainStyler
}
