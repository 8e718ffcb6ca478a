//! crates/levelog/src/macros.rs
//! `format!`-style and space-joined emitters for each level.
//!
//! The `*f!` macros take a logger followed by `format!` arguments. The `*ln!`
//! macros take a logger followed by any number of [`Display`](std::fmt::Display)
//! values, joined by single spaces and terminated by a newline. Caller
//! locations recorded by `Flags::LONG_FILE`/`Flags::SHORT_FILE` point at the
//! macro invocation.

/// Logs at DEBUG in `format!` style.
///
/// # Example
/// ```
/// use levelog::{Flags, Level, Logger};
///
/// let logger = Logger::new(Vec::new(), "", Flags::empty(), Level::Debug);
/// levelog::debugf!(logger, "{} {}", "test", "message");
/// assert_eq!(logger.into_inner(), b"[DEBUG] test message\n".to_vec());
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Logs at DEBUG, joining the operands with spaces.
///
/// # Example
/// ```
/// use levelog::{Flags, Level, Logger};
///
/// let logger = Logger::new(Vec::new(), "", Flags::empty(), Level::Debug);
/// levelog::debugln!(logger, "retry", 3, "of", 5);
/// assert_eq!(logger.into_inner(), b"[DEBUG] retry 3 of 5\n".to_vec());
/// ```
#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debugln(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at INFO in `format!` style.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Logs at INFO, joining the operands with spaces.
#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.infoln(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at WARN in `format!` style.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Logs at WARN, joining the operands with spaces.
#[macro_export]
macro_rules! warnln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warnln(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at ERROR in `format!` style.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Logs at ERROR, joining the operands with spaces.
#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorln(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs at FATAL in `format!` style and exits the process with status 1.
///
/// # Example
/// ```no_run
/// use levelog::{Flags, Level, Logger};
///
/// let logger = Logger::new(std::io::stderr(), "", Flags::STD, Level::Info);
/// levelog::fatalf!(logger, "cannot open {}", "/etc/app.toml");
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

/// Logs at FATAL, joining the operands with spaces, and exits the process with status 1.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatalln(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
