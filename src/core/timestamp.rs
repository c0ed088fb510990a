//! Timestamp formatting utilities
//!
//! Log lines carry a local wall-clock timestamp with millisecond precision by
//! default. Alternate formats are available for sinks that are read by other
//! tools.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern for the default `2025-01-08 10:30:45.123` layout.
pub const LOCAL_MILLIS_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use tripwire::core::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::LocalMillis.format(&Local::now());
/// assert_eq!(stamp.len(), "2025-01-08 10:30:45.123".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time with milliseconds: `2025-01-08 10:30:45.123`
    #[default]
    LocalMillis,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// Custom strftime format, rendered in local time
    Custom(String),
}

impl TimestampFormat {
    /// Build a custom format, rejecting empty or malformed strftime strings.
    pub fn custom(format_str: &str) -> Result<Self> {
        if format_str.is_empty() {
            return Err(LoggerError::config("timestamp", "empty format string"));
        }
        if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "timestamp",
                format!("invalid strftime format '{}'", format_str),
            ));
        }
        Ok(TimestampFormat::Custom(format_str.to_string()))
    }

    /// Format a local `DateTime` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::LocalMillis => datetime.format(LOCAL_MILLIS_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Custom(format_str) => {
                // Display errors on malformed items, so render through fmt::Write
                // and fall back to the default layout instead of panicking.
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    out.clear();
                    out.push_str(&datetime.format(LOCAL_MILLIS_PATTERN).to_string());
                }
                out
            }
        }
    }

    /// Format the current instant
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .earliest()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_local_millis_format() {
        let result = TimestampFormat::LocalMillis.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45.123");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert!(result.ends_with(".123Z"));
        assert!(result.contains('T'));
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::custom("%Y/%m/%d %H:%M").unwrap();
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_custom_rejects_bad_input() {
        assert!(TimestampFormat::custom("").is_err());
        assert!(matches!(
            TimestampFormat::custom("%Q"),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_unchecked_custom_falls_back() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08 10:30:45.123");
    }

    #[test]
    fn test_default_is_local_millis() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::LocalMillis);
    }
}
