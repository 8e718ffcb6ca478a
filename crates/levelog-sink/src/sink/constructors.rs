use std::mem;
use std::sync::{Mutex, PoisonError};

use time::UtcOffset;

use super::{LineSink, SinkState};
use crate::flags::Flags;

impl<W> LineSink<W> {
    /// Creates a sink writing to `writer` with the given line prefix and header flags.
    ///
    /// The local UTC offset is captured here. When the platform cannot report
    /// it, including on Unix once other threads are running, local timestamps
    /// fall back to UTC. Build the sink before spawning threads, or use
    /// [`with_local_offset`](Self::with_local_offset) to supply the offset.
    #[must_use]
    pub fn new(writer: W, prefix: impl Into<String>, flags: Flags) -> Self {
        let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        Self::with_local_offset(writer, prefix, flags, local_offset)
    }

    /// Creates a sink that renders local timestamps with an explicit offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::thread;
    /// use levelog_sink::{CallSite, Flags, LineSink};
    /// use time::UtcOffset;
    ///
    /// let offset = UtcOffset::from_hms(5, 30, 0).unwrap();
    /// let sink = thread::spawn(move || {
    ///     let sink = LineSink::with_local_offset(Vec::new(), "", Flags::empty(), offset);
    ///     sink.output(CallSite::caller(), "from a worker").unwrap();
    ///     sink
    /// })
    /// .join()
    /// .unwrap();
    ///
    /// assert_eq!(sink.into_inner(), b"from a worker\n".to_vec());
    /// ```
    #[must_use]
    pub fn with_local_offset(
        writer: W,
        prefix: impl Into<String>,
        flags: Flags,
        local_offset: UtcOffset,
    ) -> Self {
        Self {
            state: Mutex::new(SinkState {
                writer,
                prefix: prefix.into(),
                flags,
                scratch: Vec::new(),
            }),
            local_offset,
        }
    }

    /// Returns a copy of the current line prefix.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    /// Replaces the line prefix used for subsequent lines.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().prefix = prefix.into();
    }

    /// Returns the current header flags.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    /// Replaces the header flags used for subsequent lines.
    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    /// Runs `f` with the writer while holding the sink's lock.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock().writer)
    }

    /// Swaps in a new writer and returns the previous one.
    ///
    /// Lines already handed to the previous writer stay there; the caller
    /// decides whether to flush or inspect it.
    #[must_use = "the returned writer holds the lines written before the replacement"]
    pub fn replace_writer(&self, writer: W) -> W {
        mem::replace(&mut self.lock().writer, writer)
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}

impl<W> Default for LineSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default(), String::new(), Flags::STD)
    }
}
