//! Log line formatting.
//!
//! # Responsibilities
//! - Render one emitted record as a single console line
//! - Provide the two fixed templates: simple and line-number-annotated
//! - Share timestamp rendering between templates
//!
//! # Design Decisions
//! - Templates are code, not user-supplied pattern strings
//! - Records below the sink threshold never reach a formatter
//! - Formatters write plain text; no ANSI styling

pub mod timestamp;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Line template used by a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    /// `<timestamp> [<severity>] <sink-name>: <message>`
    Simple,
    /// `<timestamp> - <sink-name> - <severity> - <module> - <file>:<line> - <message>`
    Detailed,
}

/// The simple console template.
#[derive(Debug, Clone)]
pub struct SimpleFormat {
    sink_name: String,
}

impl SimpleFormat {
    pub fn new(sink_name: impl Into<String>) -> Self {
        Self {
            sink_name: sink_name.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for SimpleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} [{}] {}: ",
            timestamp::now(),
            event.metadata().level(),
            self.sink_name
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// The line-number-annotated template.
///
/// Module, file, and line identify the emitting call site; the file is
/// reduced to its base name to keep lines compact.
#[derive(Debug, Clone)]
pub struct DetailedFormat {
    sink_name: String,
}

impl DetailedFormat {
    pub fn new(sink_name: impl Into<String>) -> Self {
        Self {
            sink_name: sink_name.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for DetailedFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - {} - {}:{} - ",
            timestamp::now(),
            self.sink_name,
            meta.level(),
            meta.module_path().unwrap_or("unknown"),
            meta.file().map(file_name).unwrap_or("unknown"),
            meta.line().unwrap_or(0),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Reduce a source path to its base name.
fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
