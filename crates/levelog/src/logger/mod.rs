//! crates/levelog/src/logger/mod.rs
//! Filtered logger: a line sink plus a minimum severity.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use levelog_sink::{Flags, LineSink};

use crate::level::Level;

mod emit;

/// Exit status used by the `fatal*` emitters.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logger that drops lines below a minimum [`Level`].
///
/// The logger composes a [`LineSink`], which owns the destination and renders
/// the header, with a threshold checked before any formatting happens. Lines
/// at or above the threshold are tagged with [`Level::prefix`] and handed to
/// the sink; lines below it cost one atomic load.
///
/// Every emitter takes `&self`, so a logger can be shared between threads
/// behind an `Arc` whenever the destination is `Send`.
///
/// # Examples
///
/// ```
/// use levelog::{Flags, Level, Logger};
///
/// let logger = Logger::new(Vec::new(), "", Flags::empty(), Level::Info);
/// levelog::debugf!(logger, "cache miss for {}", "user:42");
/// levelog::infof!(logger, "listening on {}", 8080);
/// levelog::warnln!(logger, "disk", 91, "% full");
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "[INFO] listening on 8080\n[WARN] disk 91 % full\n");
/// ```
pub struct Logger<W> {
    sink: LineSink<W>,
    min_level: AtomicU8,
}

impl<W> Logger<W> {
    /// Creates a logger writing to `destination`.
    ///
    /// `prefix` and `flags` configure the line header exactly as for
    /// [`LineSink::new`]; `min_level` is the lowest level that is written.
    /// Construction never fails and performs no I/O. The local UTC offset is
    /// captured here and falls back to UTC when it cannot be read, which on
    /// Unix includes any time other threads are running; pass a sink built
    /// with [`LineSink::with_local_offset`] to [`from_sink`](Self::from_sink)
    /// to choose the offset explicitly.
    #[must_use]
    pub fn new(destination: W, prefix: impl Into<String>, flags: Flags, min_level: Level) -> Self {
        Self::from_sink(LineSink::new(destination, prefix, flags), min_level)
    }

    /// Wraps an existing sink.
    #[must_use]
    pub fn from_sink(sink: LineSink<W>, min_level: Level) -> Self {
        Self {
            sink,
            min_level: AtomicU8::new(min_level.as_u8()),
        }
    }

    /// Returns the current minimum level.
    #[must_use]
    pub fn min_level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    /// Changes the minimum level for emissions that start after this call.
    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Reports whether a line at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level()
    }

    /// Borrows the line sink, for example to change the prefix or flags.
    #[must_use]
    pub const fn sink(&self) -> &LineSink<W> {
        &self.sink
    }

    /// Consumes the logger and returns the line sink.
    #[must_use]
    pub fn into_sink(self) -> LineSink<W> {
        self.sink
    }

    /// Consumes the logger and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W> fmt::Debug for Logger<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink)
            .field("min_level", &self.min_level())
            .finish()
    }
}
