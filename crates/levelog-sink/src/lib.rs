#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/levelog-sink/src/lib.rs
//!
//! # Overview
//!
//! `levelog-sink` is the general-purpose line logger underneath `levelog`.
//! It knows nothing about severity levels: it prepends a configurable header
//! (line prefix, date, time, caller location) to each message and writes the
//! finished line to an arbitrary [`std::io::Write`] destination.
//!
//! # Design
//!
//! [`LineSink`] keeps the writer, prefix, [`Flags`] and a scratch buffer
//! behind one mutex. Lines are rendered into the scratch buffer, which is
//! reused across calls, and then written in one piece. Caller locations are
//! carried as [`CallSite`] values so wrappers marked `#[track_caller]` can
//! report their caller rather than themselves.
//!
//! # Invariants
//!
//! - Every line ends with exactly one `\n` added by the sink unless the
//!   message already supplied it.
//! - Lines written concurrently never interleave.
//! - The header layout with [`Flags::STD`] is `YYYY/MM/DD HH:MM:SS `.
//!
//! # Errors
//!
//! [`LineSink::output`] and [`LineSink::flush`] surface the
//! [`std::io::Error`] produced by the destination unchanged.
//!
//! # Examples
//!
//! ```
//! use levelog_sink::{CallSite, Flags, LineSink};
//!
//! let sink = LineSink::new(Vec::new(), "", Flags::STD);
//! sink.output(CallSite::caller(), "ready").unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.ends_with(" ready\n"));
//! assert_eq!(output.len(), "2026/01/01 00:00:00 ready\n".len());
//! ```

mod call_site;
mod flags;
mod header;
mod sink;

pub use call_site::CallSite;
pub use flags::Flags;
pub use sink::LineSink;
