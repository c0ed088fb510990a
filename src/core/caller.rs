//! Call-site attribution
//!
//! Public entry points are `#[track_caller]`, so `Location::caller()` taken at
//! the API boundary resolves to the first frame outside that chain: the user's
//! call site. Locations that still land inside the logger's own emission code
//! are suppressed rather than shown.

use std::fmt;
use std::panic::Location;

/// Source files whose locations are never reported as a caller.
fn internal_sources() -> [&'static str; 3] {
    [
        super::logger::SOURCE_FILE,
        crate::global::SOURCE_FILE,
        crate::check::SOURCE_FILE,
    ]
}

/// A resolved call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerLocation {
    file: &'static str,
    line: u32,
}

impl CallerLocation {
    /// Capture the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// True when the location points into the logger's own implementation.
    pub fn is_internal(&self) -> bool {
        internal_sources().contains(&self.file)
    }

    /// `None` for internal locations, otherwise the location itself.
    pub fn external(self) -> Option<Self> {
        if self.is_internal() {
            None
        } else {
            Some(self)
        }
    }

    /// Compact `dir/file.rs:line` form; paths with a single segment are kept whole.
    pub fn short(&self) -> String {
        let mut segments = self
            .file
            .rsplit(['/', '\\'])
            .filter(|segment| !segment.is_empty());

        match (segments.next(), segments.next()) {
            (Some(file), Some(parent)) => format!("{}/{}:{}", parent, file, self.line),
            _ => format!("{}:{}", self.file, self.line),
        }
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_keeps_parent_directory() {
        let loc = CallerLocation::new("/home/dev/project/src/handlers/auth.rs", 42);
        assert_eq!(loc.short(), "handlers/auth.rs:42");

        let loc = CallerLocation::new("src/main.rs", 7);
        assert_eq!(loc.short(), "src/main.rs:7");
    }

    #[test]
    fn test_short_single_segment() {
        let loc = CallerLocation::new("main.rs", 3);
        assert_eq!(loc.short(), "main.rs:3");
    }

    #[test]
    fn test_short_windows_separators() {
        let loc = CallerLocation::new("C:\\work\\app\\src\\lib.rs", 10);
        assert_eq!(loc.short(), "src/lib.rs:10");
    }

    #[test]
    fn test_capture_points_here() {
        let loc = CallerLocation::capture();
        assert_eq!(loc.file(), file!());
        assert_eq!(loc.line(), line!() - 2);
        assert!(!loc.is_internal());
    }

    #[test]
    fn test_logger_source_is_internal() {
        let loc = CallerLocation::new(super::super::logger::SOURCE_FILE, 1);
        assert!(loc.is_internal());
        assert_eq!(loc.external(), None);
    }
}
