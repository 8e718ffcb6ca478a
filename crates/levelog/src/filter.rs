//! crates/levelog/src/filter.rs
//! Writer adapter that drops lines whose bracketed level tag is below a threshold.

use std::io::{self, Write};

use crate::level::Level;

/// [`io::Write`] adapter that filters whole lines by their level tag.
///
/// Each `write` call is treated as one line. The tag is the text between the
/// first `[` and the first `]` after it. When that text is exactly one of the
/// level names (upper case, as produced by [`Level::prefix`]) and the level
/// is below the minimum, the buffer is discarded and reported as written.
/// Lines without a tag, or with a tag that is not a level name, always pass.
/// Passing lines are forwarded whole with `write_all`.
///
/// This is useful for filtering output produced by code that already writes
/// tagged lines, such as another process piped into this one.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use levelog::{Level, LevelFilter};
///
/// let mut filter = LevelFilter::new(Vec::new(), Level::Warn);
/// filter.write_all(b"[DEBUG] noisy\n")?;
/// filter.write_all(b"[ERROR] broken\n")?;
/// filter.write_all(b"plain line\n")?;
///
/// assert_eq!(filter.into_inner(), b"[ERROR] broken\nplain line\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct LevelFilter<W> {
    writer: W,
    min_level: Level,
}

impl<W> LevelFilter<W> {
    /// Wraps `writer`, passing lines tagged `min_level` or above.
    #[must_use]
    pub const fn new(writer: W, min_level: Level) -> Self {
        Self { writer, min_level }
    }

    /// Returns the minimum level.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Changes the minimum level.
    pub fn set_min_level(&mut self, min_level: Level) {
        self.min_level = min_level;
    }

    /// Reports whether `line` would be forwarded.
    #[must_use]
    pub fn check(&self, line: &[u8]) -> bool {
        tagged_level(line).is_none_or(|level| level >= self.min_level)
    }

    /// Borrows the wrapped writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the wrapped writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the filter and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Write for LevelFilter<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.check(buf) {
            self.writer.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn tag(line: &[u8]) -> Option<&[u8]> {
    let open = line.iter().position(|&byte| byte == b'[')?;
    let rest = &line[open + 1..];
    let close = rest.iter().position(|&byte| byte == b']')?;
    Some(&rest[..close])
}

fn tagged_level(line: &[u8]) -> Option<Level> {
    let tag = tag(line)?;
    Level::ALL
        .into_iter()
        .find(|level| level.as_str().as_bytes() == tag)
}
