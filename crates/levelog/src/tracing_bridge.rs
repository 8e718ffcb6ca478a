//! crates/levelog/src/tracing_bridge.rs
//! Bridge from the tracing crate into a leveled [`Logger`].
//!
//! [`LeveledLayer`] is a tracing-subscriber layer that renders each event as
//! one tagged line on a shared logger, so libraries instrumented with
//! `tracing` and code calling the leveled emitters directly end up in the same
//! destination with the same header.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use levelog::{Flags, Level, Logger, init_tracing};
//!
//! let logger = Arc::new(Logger::new(std::io::stderr(), "", Flags::STD, Level::Info));
//! init_tracing(Arc::clone(&logger))?;
//!
//! tracing::info!(peer = "10.0.0.7", "connection accepted");
//! // 2026/02/21 14:30:05 [INFO] connection accepted peer="10.0.0.7"
//! ```

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::Arc;

use levelog_sink::CallSite;
use tracing::subscriber::Interest;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that writes events through a leveled [`Logger`].
///
/// Events are filtered by the logger's current minimum level. The layer never
/// exits the process: tracing has no fatal level.
pub struct LeveledLayer<W> {
    logger: Arc<Logger<W>>,
}

impl<W> LeveledLayer<W> {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Returns the logger events are written to.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger<W>> {
        &self.logger
    }

    /// Map a tracing level to a severity level.
    const fn map_level(level: tracing::Level) -> Level {
        match level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        }
    }
}

impl<S, W> Layer<S> for LeveledLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // The threshold can change at runtime; never cache a callsite's interest.
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger.enabled(Self::map_level(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(*metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let call_site = CallSite::new(
            metadata.file().unwrap_or(metadata.target()),
            metadata.line().unwrap_or(0),
        );
        let _ = self
            .logger
            .try_log_at(level, call_site, format_args!("{visitor}"));
    }
}

/// Collects the message and the remaining fields of an event.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl EventVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl tracing::field::Visit for EventVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}

impl fmt::Display for EventVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => f.write_str(&self.message),
            (true, false) => f.write_str(&self.fields),
            (false, false) => write!(f, "{} {}", self.message, self.fields),
        }
    }
}

/// Installs a global tracing subscriber that writes events through `logger`.
///
/// Fails when a global subscriber has already been set.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use levelog::{LoggerConfig, init_tracing};
///
/// let logger = Arc::new(LoggerConfig::from_env()?.build(std::io::stderr()));
/// init_tracing(logger)?;
/// tracing::warn!("cache disabled");
/// ```
pub fn init_tracing<W>(logger: Arc<Logger<W>>) -> Result<(), TryInitError>
where
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LeveledLayer::new(logger))
        .try_init()
}
