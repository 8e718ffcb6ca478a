//! crates/levelog-sink/src/header.rs
//! Rendering of the per-line header and message terminator.

use std::io::{self, Write};

use time::{OffsetDateTime, UtcOffset};

use crate::call_site::CallSite;
use crate::flags::Flags;

/// Returns the current time in the zone selected by `flags`.
///
/// `local` is the offset captured when the sink was built; the `time` crate
/// cannot always query it safely once other threads are running.
pub fn now(flags: Flags, local: UtcOffset) -> OffsetDateTime {
    let utc = OffsetDateTime::now_utc();
    if flags.contains(Flags::UTC) {
        utc
    } else {
        utc.to_offset(local)
    }
}

/// Appends one complete line to `buf`: header, message and a trailing newline
/// when `message` does not already end with one.
///
/// Layout: `prefix? date? time? file:line:? msgprefix? message`.
pub fn render_line(
    buf: &mut Vec<u8>,
    prefix: &str,
    flags: Flags,
    at: OffsetDateTime,
    call_site: CallSite<'_>,
    message: &str,
) -> io::Result<()> {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.extend_from_slice(prefix.as_bytes());
    }

    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        let at = if flags.contains(Flags::UTC) {
            at.to_offset(UtcOffset::UTC)
        } else {
            at
        };

        if flags.contains(Flags::DATE) {
            write!(
                buf,
                "{:04}/{:02}/{:02} ",
                at.year(),
                u8::from(at.month()),
                at.day()
            )?;
        }

        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            write!(buf, "{:02}:{:02}:{:02}", at.hour(), at.minute(), at.second())?;
            if flags.contains(Flags::MICROSECONDS) {
                write!(buf, ".{:06}", at.microsecond())?;
            }
            buf.push(b' ');
        }
    }

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let file = if flags.contains(Flags::SHORT_FILE) {
            call_site.short_file()
        } else {
            call_site.file()
        };
        write!(buf, "{file}:{}: ", call_site.line())?;
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.extend_from_slice(prefix.as_bytes());
    }

    buf.extend_from_slice(message.as_bytes());
    if !message.ends_with('\n') {
        buf.push(b'\n');
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const AT: OffsetDateTime = datetime!(2026-02-21 14:30:05.123456 UTC);

    fn render(prefix: &str, flags: Flags, message: &str) -> String {
        let mut buf = Vec::new();
        render_line(
            &mut buf,
            prefix,
            flags,
            AT,
            CallSite::new("src/server/conn.rs", 88),
            message,
        )
        .expect("render into Vec never fails");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn standard_header() {
        assert_eq!(render("", Flags::STD, "hello"), "2026/02/21 14:30:05 hello\n");
    }

    #[test]
    fn no_flags_only_message() {
        assert_eq!(render("", Flags::empty(), "hello"), "hello\n");
    }

    #[test]
    fn existing_newline_is_not_doubled() {
        assert_eq!(render("", Flags::empty(), "hello\n"), "hello\n");
    }

    #[test]
    fn microseconds_imply_time() {
        assert_eq!(
            render("", Flags::MICROSECONDS, "tick"),
            "14:30:05.123456 tick\n"
        );
    }

    #[test]
    fn prefix_leads_by_default() {
        assert_eq!(
            render("app: ", Flags::DATE, "up"),
            "app: 2026/02/21 up\n"
        );
    }

    #[test]
    fn msg_prefix_moves_prefix_before_message() {
        assert_eq!(
            render("app: ", Flags::DATE | Flags::MSG_PREFIX, "up"),
            "2026/02/21 app: up\n"
        );
    }

    #[test]
    fn long_and_short_file() {
        assert_eq!(
            render("", Flags::LONG_FILE, "x"),
            "src/server/conn.rs:88: x\n"
        );
        assert_eq!(
            render("", Flags::LONG_FILE | Flags::SHORT_FILE, "x"),
            "conn.rs:88: x\n"
        );
    }

    #[test]
    fn utc_flag_converts_offset_time() {
        let mut buf = Vec::new();
        let local = datetime!(2026-02-21 23:30:00 +02:00);
        render_line(
            &mut buf,
            "",
            Flags::STD | Flags::UTC,
            local,
            CallSite::new("a.rs", 1),
            "m",
        )
        .expect("render");
        assert_eq!(buf, b"2026/02/21 21:30:00 m\n");
    }

    #[test]
    fn now_honours_utc_flag() {
        let offset = UtcOffset::from_hms(5, 30, 0).expect("valid offset");
        assert_eq!(now(Flags::UTC, offset).offset(), UtcOffset::UTC);
        assert_eq!(now(Flags::STD, offset).offset(), offset);
    }
}
