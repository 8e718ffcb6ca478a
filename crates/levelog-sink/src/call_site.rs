//! crates/levelog-sink/src/call_site.rs
//! Source position of the code that emitted a line.

use std::fmt;
use std::panic::Location;

/// File and line of the call that produced a log line.
///
/// Rendered into the header when [`Flags::LONG_FILE`](crate::Flags::LONG_FILE)
/// or [`Flags::SHORT_FILE`](crate::Flags::SHORT_FILE) is selected.
///
/// # Examples
///
/// ```
/// use levelog_sink::CallSite;
///
/// let site = CallSite::new("src/net/conn.rs", 42);
/// assert_eq!(site.short_file(), "conn.rs");
/// assert_eq!(site.to_string(), "src/net/conn.rs:42");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the full file path.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the final path component of the file.
    #[must_use]
    pub fn short_file(&self) -> &'a str {
        match self.file.rfind(['/', '\\']) {
            Some(separator) => &self.file[separator + 1..],
            None => self.file,
        }
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl CallSite<'static> {
    /// Captures the location of the caller.
    ///
    /// Functions that forward to this one should carry `#[track_caller]`
    /// themselves so the captured location is the outermost user frame.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
