#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/levelog/src/lib.rs
//!
//! # Overview
//!
//! `levelog` adds severity levels on top of the plain line logger in
//! `levelog-sink`. A [`Logger`] owns a destination and a minimum [`Level`];
//! lines at or above the minimum are written with a bracketed tag such as
//! `[WARN] ` in front of the message, and lines below it are dropped before
//! any formatting happens.
//!
//! With [`Flags::STD`] every line has the shape
//!
//! ```text
//! YYYY/MM/DD HH:MM:SS [LEVEL] message
//! ```
//!
//! # Design
//!
//! - [`Level`] is the severity registry. [`resolve_level`] maps user-supplied
//!   names onto it and falls back to INFO; `str::parse` is the strict variant.
//! - [`Logger`] composes a [`LineSink`] with an atomic threshold. Emitters come
//!   in `format!` style (`infof`) and space-joined style (`infoln`), both as
//!   methods and as macros ([`infof!`], [`infoln!`], ...).
//! - `fatalf`/`fatalln` write the line, flush the destination and exit the
//!   process with [`FATAL_EXIT_CODE`].
//! - [`LevelFilter`] is a writer adapter filtering already-tagged lines, for
//!   output that was not produced by a [`Logger`].
//! - [`LoggerConfig`] reads settings from the environment.
//! - With the `tracing` feature, `LeveledLayer` forwards `tracing` events to a
//!   logger.
//!
//! # Invariants
//!
//! - A line below the threshold writes zero bytes.
//! - A line at or above the threshold is written with one `write_all` call and
//!   never interleaves with lines from other threads.
//! - FATAL lines are always written; a logger cannot be configured above FATAL.
//!
//! # Errors
//!
//! The convenience emitters ignore destination errors. [`Logger::try_log`]
//! and [`Logger::try_logln`] return them. Configuration parsing reports
//! [`ConfigError`] and [`ParseLevelError`].
//!
//! # Examples
//!
//! ```
//! use levelog::{Flags, Level, Logger, resolve_level};
//!
//! let logger = Logger::new(Vec::new(), "", Flags::empty(), resolve_level("warn"));
//! levelog::infof!(logger, "not shown");
//! levelog::errorf!(logger, "upload of {} failed", "report.pdf");
//!
//! assert_eq!(logger.into_inner(), b"[ERROR] upload of report.pdf failed\n".to_vec());
//! ```
//!
//! # See also
//!
//! - [`levelog_sink`] for the header flags and the unleveled sink.

mod config;
mod filter;
mod level;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ConfigError, FLAGS_ENV, LEVEL_ENV, LoggerConfig, PREFIX_ENV, parse_flag_list};
pub use filter::LevelFilter;
pub use level::{Level, ParseLevelError, resolve_level};
pub use levelog_sink::{CallSite, Flags, LineSink};
pub use logger::{FATAL_EXIT_CODE, Logger};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LeveledLayer, init_tracing};
