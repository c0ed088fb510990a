//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes either a logger followed by a format string, or just a
//! format string to log through the default logger. Arguments are captured
//! with `format_args!`, so nothing is formatted for a filtered-out level.
//!
//! # Examples
//!
//! ```
//! use tripwire::prelude::*;
//! use tripwire::info;
//!
//! let logger = Logger::new();
//!
//! // Explicit logger
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Default logger
//! info!("user {} logged in", "alice");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use tripwire::prelude::*;
/// # let logger = Logger::new();
/// use tripwire::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use tripwire::prelude::*;
/// # let logger = Logger::new();
/// use tripwire::debug;
/// debug!(logger, "Counter value: {}", 10);
/// debug!("default logger, {} args", 2);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::debug(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use tripwire::prelude::*;
/// # let logger = Logger::new();
/// use tripwire::info;
/// info!(logger, "Processing {} items", 100);
/// info!("Application started");
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::info(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use tripwire::prelude::*;
/// # let logger = Logger::new();
/// use tripwire::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// warn!("Low disk space");
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::warn(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use tripwire::prelude::*;
/// # let logger = Logger::new();
/// use tripwire::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// error!("Failed to connect to database");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::error(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Log a fatal-level message and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use tripwire::prelude::*;
/// # let logger = Logger::new();
/// use tripwire::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::fatal(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}
