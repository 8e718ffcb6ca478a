use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use time::UtcOffset;

use crate::flags::Flags;

/// Line-oriented logger that renders a header and message onto a writer.
///
/// The sink owns the writer together with the line prefix, the header
/// [`Flags`] and a reusable scratch buffer, all behind one [`Mutex`]. Each
/// call to [`output`](Self::output) renders the complete line into the scratch
/// buffer and hands it to the writer with a single `write_all`, so lines from
/// concurrent callers never interleave. The sink is `Sync` whenever `W: Send`
/// and is normally shared by reference or behind an `Arc`.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] without a timestamp:
///
/// ```
/// use levelog_sink::{CallSite, Flags, LineSink};
///
/// let sink = LineSink::new(Vec::new(), "worker: ", Flags::empty());
/// sink.output(CallSite::caller(), "started")?;
/// sink.output(CallSite::caller(), "stopped\n")?;
///
/// assert_eq!(sink.into_inner(), b"worker: started\nworker: stopped\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Prefix each line with the caller's file name:
///
/// ```
/// use levelog_sink::{CallSite, Flags, LineSink};
///
/// let sink = LineSink::new(Vec::new(), "", Flags::SHORT_FILE);
/// sink.output(CallSite::new("src/db/pool.rs", 12), "checked out")?;
///
/// assert_eq!(sink.into_inner(), b"pool.rs:12: checked out\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineSink<W> {
    state: Mutex<SinkState<W>>,
    local_offset: UtcOffset,
}

struct SinkState<W> {
    writer: W,
    prefix: String,
    flags: Flags,
    scratch: Vec<u8>,
}

mod constructors;
mod writing;

impl<W> LineSink<W> {
    fn lock(&self) -> MutexGuard<'_, SinkState<W>> {
        // Fields are replaced wholesale and scratch is cleared before use,
        // so a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("LineSink")
            .field("writer", &state.writer)
            .field("prefix", &state.prefix)
            .field("flags", &state.flags)
            .field("local_offset", &self.local_offset)
            .finish_non_exhaustive()
    }
}
