//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so a minimal (or empty) file is valid; a
//! partially specified sink section inherits the traced-demo defaults
//! field by field, and validation catches any resulting name collision.

use serde::{Deserialize, Serialize};

use crate::format::LineFormat;
use crate::sink::{ConsoleStream, Sink, SinkError};

/// Root configuration: one sink per demonstration wrapper.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Sink used by the fully traced wrapper.
    pub simple: SinkConfig,

    /// Sink used by the errors-only wrapper.
    pub detailed: SinkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simple: SinkConfig::simple_default(),
            detailed: SinkConfig::detailed_default(),
        }
    }
}

/// One sink definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Sink name, printed in every line.
    pub name: String,

    /// Minimum severity let through ("trace", "debug", "info", "warn",
    /// "error", or "off").
    pub min_level: String,

    /// Line template for the console destination.
    pub format: LineFormat,

    /// Console stream the destination writes to.
    pub stream: ConsoleStream,
}

impl SinkConfig {
    /// Defaults for the traced demo: everything through, simple template.
    pub fn simple_default() -> Self {
        Self {
            name: "my_module".to_owned(),
            min_level: "trace".to_owned(),
            format: LineFormat::Simple,
            stream: ConsoleStream::Stderr,
        }
    }

    /// Defaults for the errors-only demo: warnings and up, detailed template.
    pub fn detailed_default() -> Self {
        Self {
            name: "app".to_owned(),
            min_level: "warn".to_owned(),
            format: LineFormat::Detailed,
            stream: ConsoleStream::Stderr,
        }
    }

    /// Materialize the configured sink.
    pub fn build(&self) -> Result<Sink, SinkError> {
        let builder = Sink::builder(&self.name).min_level_str(&self.min_level)?;
        Ok(builder.console(self.stream, self.format).build())
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::simple_default()
    }
}
