//! Log sinks.
//!
//! # Data Flow
//! ```text
//! Sink::trace / Sink::error
//!     → sink-scoped dispatch (the global subscriber is never consulted)
//!     → severity filter (per destination)
//!     → line template (format module)
//!     → destination stream (console, memory)
//! ```
//!
//! # Design Decisions
//! - Sinks are explicit values shared via Arc, never a process-global
//! - Configuration is fixed at build(); emission is read-only
//! - Each destination pairs one writer with one line template
//! - Two sinks built independently cannot receive each other's records

pub mod destination;

use std::fmt;

use thiserror::Error;
use tracing::dispatcher;
use tracing::Dispatch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::Layer;

use crate::format::{DetailedFormat, LineFormat, SimpleFormat};

pub use destination::{ConsoleStream, MemoryBuffer};
pub use tracing::level_filters::LevelFilter;

/// Error building a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Severity string not recognized by the level parser.
    #[error("unknown severity level: {0}")]
    UnknownLevel(String),
}

/// A named log sink with a fixed set of destinations.
///
/// Records are routed through the sink's own dispatch, so independently
/// configured sinks stay isolated from each other and from any global
/// subscriber the embedding application installs.
pub struct Sink {
    name: String,
    dispatch: Dispatch,
}

impl Sink {
    /// Start building a sink with the given name.
    pub fn builder(name: impl Into<String>) -> SinkBuilder {
        SinkBuilder::new(name.into())
    }

    /// Name printed in every line this sink emits.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit a trace record.
    pub fn trace(&self, message: impl fmt::Display) {
        dispatcher::with_default(&self.dispatch, || tracing::trace!("{}", message));
    }

    /// Emit a debug record.
    pub fn debug(&self, message: impl fmt::Display) {
        dispatcher::with_default(&self.dispatch, || tracing::debug!("{}", message));
    }

    /// Emit an info record.
    pub fn info(&self, message: impl fmt::Display) {
        dispatcher::with_default(&self.dispatch, || tracing::info!("{}", message));
    }

    /// Emit a warning record.
    pub fn warn(&self, message: impl fmt::Display) {
        dispatcher::with_default(&self.dispatch, || tracing::warn!("{}", message));
    }

    /// Emit an error record.
    pub fn error(&self, message: impl fmt::Display) {
        dispatcher::with_default(&self.dispatch, || tracing::error!("{}", message));
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Sink`].
pub struct SinkBuilder {
    name: String,
    min_level: LevelFilter,
    destinations: Vec<(BoxMakeWriter, LineFormat)>,
}

impl SinkBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            min_level: LevelFilter::TRACE,
            destinations: Vec::new(),
        }
    }

    /// Minimum severity this sink lets through.
    pub fn min_level(mut self, level: LevelFilter) -> Self {
        self.min_level = level;
        self
    }

    /// Parse a severity name ("trace" through "error", or "off").
    pub fn min_level_str(self, level: &str) -> Result<Self, SinkError> {
        let parsed = level
            .parse::<LevelFilter>()
            .map_err(|_| SinkError::UnknownLevel(level.to_owned()))?;
        Ok(self.min_level(parsed))
    }

    /// Append a console destination.
    pub fn console(self, stream: ConsoleStream, format: LineFormat) -> Self {
        self.destination(stream.make_writer(), format)
    }

    /// Append an in-memory destination.
    pub fn memory(self, buffer: MemoryBuffer, format: LineFormat) -> Self {
        self.destination(BoxMakeWriter::new(buffer), format)
    }

    /// Append a destination with an explicit writer.
    pub fn destination(mut self, writer: BoxMakeWriter, format: LineFormat) -> Self {
        self.destinations.push((writer, format));
        self
    }

    /// Assemble the sink. Destinations receive records in insertion order.
    pub fn build(self) -> Sink {
        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

        for (writer, format) in self.destinations {
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            let layer = match format {
                LineFormat::Simple => layer
                    .event_format(SimpleFormat::new(self.name.clone()))
                    .with_filter(self.min_level)
                    .boxed(),
                LineFormat::Detailed => layer
                    .event_format(DetailedFormat::new(self.name.clone()))
                    .with_filter(self.min_level)
                    .boxed(),
            };
            layers.push(layer);
        }

        let subscriber = tracing_subscriber::registry().with(layers);

        tracing::debug!(sink = %self.name, "sink constructed");

        Sink {
            name: self.name,
            dispatch: Dispatch::new(subscriber),
        }
    }
}
