//! crates/levelog/src/config.rs
//! Logger configuration from the environment, verbosity counts and flag tokens.

use std::env;

use levelog_sink::Flags;
use thiserror::Error;

use crate::level::{Level, resolve_level};
use crate::logger::Logger;

/// Environment variable holding the minimum level name.
pub const LEVEL_ENV: &str = "LEVELOG_LEVEL";
/// Environment variable holding the line prefix.
pub const PREFIX_ENV: &str = "LEVELOG_PREFIX";
/// Environment variable holding a comma-separated list of header flag tokens.
pub const FLAGS_ENV: &str = "LEVELOG_FLAGS";

/// Error raised while reading logger configuration.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A header flag token was not recognised.
    #[error(
        "unknown format flag {0:?}, expected date, time, microseconds, longfile, shortfile, utc, msgprefix, std or none"
    )]
    UnknownFlag(String),
}

/// Settings needed to build a [`Logger`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Lowest level written.
    pub min_level: Level,
    /// Text placed at the start of each line, or before the message with `Flags::MSG_PREFIX`.
    pub prefix: String,
    /// Header fields preceding each line.
    #[cfg_attr(feature = "serde", serde(with = "flags_bits"))]
    pub flags: Flags,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            prefix: String::new(),
            flags: Flags::STD,
        }
    }
}

impl LoggerConfig {
    /// Reads [`LEVEL_ENV`], [`PREFIX_ENV`] and [`FLAGS_ENV`], keeping defaults for unset variables.
    ///
    /// The level is resolved leniently: an unknown name selects INFO. An
    /// unknown flag token is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV) {
            config.min_level = resolve_level(&level);
        }
        if let Some(prefix) = lookup(PREFIX_ENV) {
            config.prefix = prefix;
        }
        if let Some(flags) = lookup(FLAGS_ENV) {
            config.flags = parse_flag_list(&flags)?;
        }

        Ok(config)
    }

    /// Maps a `-v` count to a configuration: `0` keeps INFO, anything higher selects DEBUG.
    pub fn from_verbose_level(level: u8) -> Self {
        let min_level = if level == 0 { Level::Info } else { Level::Debug };
        Self {
            min_level,
            ..Self::default()
        }
    }

    /// Adds the header fields named by `token` (for example `"utc"` or `"shortfile"`).
    ///
    /// `"none"` clears every field.
    pub fn apply_flag_token(&mut self, token: &str) -> Result<(), ConfigError> {
        match parse_flag_token(token)? {
            Some(flags) => self.flags.insert(flags),
            None => self.flags = Flags::empty(),
        }
        Ok(())
    }

    /// Replaces the header fields with those named in a comma-separated list.
    pub fn apply_flag_list(&mut self, list: &str) -> Result<(), ConfigError> {
        self.flags = parse_flag_list(list)?;
        Ok(())
    }

    /// Builds a logger writing to `destination`.
    #[must_use]
    pub fn build<W>(&self, destination: W) -> Logger<W> {
        Logger::new(destination, self.prefix.clone(), self.flags, self.min_level)
    }
}

/// Parses a comma-separated list of flag tokens such as `"date,time,utc"`.
///
/// Blank entries are ignored, so an empty list yields no fields.
///
/// # Examples
///
/// ```
/// use levelog::{Flags, parse_flag_list};
///
/// assert_eq!(parse_flag_list("date, time").unwrap(), Flags::STD);
/// assert_eq!(parse_flag_list("std,shortfile").unwrap(), Flags::STD | Flags::SHORT_FILE);
/// assert!(parse_flag_list("date,colour").is_err());
/// ```
pub fn parse_flag_list(list: &str) -> Result<Flags, ConfigError> {
    let mut flags = Flags::empty();
    for token in list.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        match parse_flag_token(token)? {
            Some(parsed) => flags.insert(parsed),
            None => flags = Flags::empty(),
        }
    }
    Ok(flags)
}

/// `None` stands for the `none` token, which clears the set.
fn parse_flag_token(token: &str) -> Result<Option<Flags>, ConfigError> {
    let flags = match token.to_ascii_lowercase().as_str() {
        "date" => Flags::DATE,
        "time" => Flags::TIME,
        "microseconds" | "micro" => Flags::MICROSECONDS,
        "longfile" => Flags::LONG_FILE,
        "shortfile" => Flags::SHORT_FILE,
        "utc" => Flags::UTC,
        "msgprefix" => Flags::MSG_PREFIX,
        "std" => Flags::STD,
        "none" => return Ok(None),
        _ => return Err(ConfigError::UnknownFlag(token.to_owned())),
    };
    Ok(Some(flags))
}

#[cfg(feature = "serde")]
mod flags_bits {
    use levelog_sink::Flags;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(flags: &Flags, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(flags.bits())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Flags, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Flags::from_bits_truncate)
    }
}
