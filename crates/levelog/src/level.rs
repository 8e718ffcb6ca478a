//! crates/levelog/src/level.rs
//! Severity levels, their line tags and name resolution.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log line, ordered from least to most severe.
///
/// The declaration order is the filtering order: a logger configured with a
/// minimum level emits that level and every level declared after it.
///
/// # Examples
///
/// ```
/// use levelog::Level;
///
/// assert!(Level::Debug < Level::Info);
/// assert!(Level::Error < Level::Fatal);
/// assert_eq!(Level::Warn.prefix(), "[WARN] ");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
#[repr(u8)]
pub enum Level {
    /// Diagnostic detail for developers.
    Debug = 0,
    /// Routine operational messages.
    #[default]
    Info = 1,
    /// Something unexpected that the program recovered from.
    Warn = 2,
    /// An operation failed.
    Error = 3,
    /// The program cannot continue; emitting at this level exits the process.
    Fatal = 4,
}

impl Level {
    /// Every level in ascending severity.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the upper-case name used inside line tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    ///
    /// assert_eq!(Level::Debug.as_str(), "DEBUG");
    /// assert_eq!(Level::Fatal.as_str(), "FATAL");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the bracketed tag placed immediately before the message body.
    ///
    /// The tag includes its trailing space so emitters can concatenate it
    /// with the body directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    ///
    /// assert_eq!(Level::Debug.prefix(), "[DEBUG] ");
    /// assert_eq!(Level::Error.prefix(), "[ERROR] ");
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG] ",
            Self::Info => "[INFO] ",
            Self::Warn => "[WARN] ",
            Self::Error => "[ERROR] ",
            Self::Fatal => "[FATAL] ",
        }
    }

    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            3 => Self::Error,
            _ => Self::Fatal,
        }
    }

    /// Finds the level whose name equals `input` after upper-casing.
    ///
    /// Walking the registry backwards makes the last declared match win.
    fn lookup(input: &str) -> Option<Self> {
        let wanted = input.to_uppercase();
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| level.as_str() == wanted)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a level name such as `"debug"`, `"Info"` or `"WARN"`.
///
/// Matching is case-insensitive and exact: no prefixes, no surrounding
/// whitespace. Anything that is not one of the five names resolves to
/// [`Level::Info`] instead of failing. Use [`str::parse`] when unknown names
/// should be rejected.
///
/// # Examples
///
/// ```
/// use levelog::{resolve_level, Level};
///
/// assert_eq!(resolve_level("debug"), Level::Debug);
/// assert_eq!(resolve_level("Error"), Level::Error);
/// assert_eq!(resolve_level("trace"), Level::Info);
/// assert_eq!(resolve_level(""), Level::Info);
/// ```
#[must_use]
pub fn resolve_level(input: &str) -> Level {
    Level::lookup(input).unwrap_or(Level::Info)
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level {input:?}, expected one of DEBUG, INFO, WARN, ERROR, FATAL")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::lookup(input).ok_or_else(|| ParseLevelError {
            input: input.to_owned(),
        })
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(input: String) -> Result<Self, ParseLevelError> {
        input.parse()
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.as_str()
    }
}
