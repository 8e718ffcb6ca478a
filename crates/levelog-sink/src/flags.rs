//! crates/levelog-sink/src/flags.rs
//! Header field selection for rendered lines.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit set selecting which header fields precede each line.
///
/// The bit values are stable so configuration stored as an integer keeps its
/// meaning across releases.
///
/// # Examples
///
/// ```
/// use levelog_sink::Flags;
///
/// let flags = Flags::DATE | Flags::TIME;
/// assert_eq!(flags, Flags::STD);
/// assert!(flags.contains(Flags::TIME));
/// assert!(!flags.contains(Flags::UTC));
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Flags(u32);

impl Flags {
    /// Date in the local time zone: `2009/01/23`.
    pub const DATE: Self = Self(1 << 0);
    /// Time in the local time zone: `01:23:23`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies [`Flags::TIME`].
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full caller file path and line number: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final path component and line number: `d.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Render date and time in UTC rather than the local time zone.
    pub const UTC: Self = Self(1 << 5);
    /// Move the line prefix from the start of the line to just before the message.
    pub const MSG_PREFIX: Self = Self(1 << 6);
    /// Initial values for the standard logger: date and time.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u32 = (1 << 7) - 1;

    const NAMED: [(Self, &'static str); 7] = [
        (Self::DATE, "DATE"),
        (Self::TIME, "TIME"),
        (Self::MICROSECONDS, "MICROSECONDS"),
        (Self::LONG_FILE, "LONG_FILE"),
        (Self::SHORT_FILE, "SHORT_FILE"),
        (Self::UTC, "UTC"),
        (Self::MSG_PREFIX, "MSG_PREFIX"),
    ];

    /// Returns a set with no header fields.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from raw bits, discarding bits that do not name a field.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reports whether no field is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Reports whether every field in `other` is selected.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Reports whether any field in `other` is selected.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Selects the fields in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Deselects the fields in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Flags(empty)");
        }

        f.write_str("Flags(")?;
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}
