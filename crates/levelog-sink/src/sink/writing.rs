use std::io::{self, Write};

use super::{LineSink, SinkState};
use crate::call_site::CallSite;
use crate::header::{now, render_line};

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes one line made of the header selected by the sink's flags and `message`.
    ///
    /// A newline is appended when `message` does not already end with one.
    /// `call_site` is only rendered when a file flag is set; callers normally
    /// pass [`CallSite::caller`] from a `#[track_caller]` function. The whole
    /// line reaches the writer through a single `write_all` made while the
    /// sink's lock is held.
    pub fn output(&self, call_site: CallSite<'_>, message: &str) -> io::Result<()> {
        let mut state = self.lock();
        let SinkState {
            writer,
            prefix,
            flags,
            scratch,
        } = &mut *state;

        scratch.clear();
        render_line(
            scratch,
            prefix,
            *flags,
            now(*flags, self.local_offset),
            call_site,
            message,
        )?;
        let written = writer.write_all(scratch);
        drop(state);
        written
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}
