use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::process;

use levelog_sink::CallSite;

use super::{FATAL_EXIT_CODE, Logger};
use crate::level::Level;

/// Tag followed by the formatted body, without a terminator.
fn compose_formatted(level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{}{args}", level.prefix())
}

/// Tag followed by the arguments separated by single spaces and a newline.
fn compose_line(level: Level, args: &[&dyn Display]) -> String {
    let mut line = String::from(level.prefix());
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        // Only a failing Display impl can make this fail; keep what was written.
        let _ = write!(line, "{arg}");
    }
    line.push('\n');
    line
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Writes a formatted line at `level` and reports destination errors.
    ///
    /// Returns `Ok(())` without touching the destination when `level` is
    /// below the threshold.
    #[track_caller]
    pub fn try_log(&self, level: Level, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.try_log_at(level, CallSite::caller(), args)
    }

    /// Like [`try_log`](Self::try_log) with an explicit call site.
    ///
    /// Bridges that forward records from another framework use this to keep
    /// the original file and line.
    pub fn try_log_at(
        &self,
        level: Level,
        call_site: CallSite<'_>,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.sink.output(call_site, &compose_formatted(level, args))
    }

    /// Writes `args` separated by spaces at `level` and reports destination errors.
    #[track_caller]
    pub fn try_logln(&self, level: Level, args: &[&dyn Display]) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.sink
            .output(CallSite::caller(), &compose_line(level, args))
    }

    /// Writes a formatted line at `level`.
    ///
    /// Destination errors are left to the destination; use
    /// [`try_log`](Self::try_log) to observe them. Does not exit the process,
    /// even at [`Level::Fatal`].
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let _ = self.try_log(level, args);
    }

    /// Writes `args` separated by spaces at `level`. Does not exit the process.
    #[track_caller]
    pub fn logln(&self, level: Level, args: &[&dyn Display]) {
        let _ = self.try_logln(level, args);
    }

    /// Logs at DEBUG in `format!` style.
    ///
    /// Usually reached through [`debugf!`](crate::debugf).
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Logs at DEBUG, space-separating `args` and ending the line.
    #[track_caller]
    pub fn debugln(&self, args: &[&dyn Display]) {
        self.logln(Level::Debug, args);
    }

    /// Logs at INFO in `format!` style.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Logs at INFO, space-separating `args`.
    #[track_caller]
    pub fn infoln(&self, args: &[&dyn Display]) {
        self.logln(Level::Info, args);
    }

    /// Logs at WARN in `format!` style.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Logs at WARN, space-separating `args`.
    #[track_caller]
    pub fn warnln(&self, args: &[&dyn Display]) {
        self.logln(Level::Warn, args);
    }

    /// Logs at ERROR in `format!` style.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Logs at ERROR, space-separating `args`.
    #[track_caller]
    pub fn errorln(&self, args: &[&dyn Display]) {
        self.logln(Level::Error, args);
    }

    /// Logs at FATAL in `format!` style, then exits the process with
    /// [`FATAL_EXIT_CODE`].
    ///
    /// The destination is flushed before exiting. Destructors do not run and
    /// lines being written by other threads may be lost.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        self.exit_fatal()
    }

    /// Logs at FATAL, space-separating `args`, then exits the process with
    /// [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn fatalln(&self, args: &[&dyn Display]) -> ! {
        self.logln(Level::Fatal, args);
        self.exit_fatal()
    }

    fn exit_fatal(&self) -> ! {
        let _ = self.sink.flush();
        process::exit(FATAL_EXIT_CODE)
    }
}
