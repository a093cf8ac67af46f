//! Sink output destinations.
//!
//! # Design Decisions
//! - Console destinations acquire a fresh locked handle per record
//! - A destination owns whatever serialization its stream needs
//! - The memory destination exists so tests can assert on emitted lines

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Console stream a destination writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    Stdout,
    /// The default, keeping log lines apart from program output.
    #[default]
    Stderr,
}

impl ConsoleStream {
    pub(crate) fn make_writer(self) -> BoxMakeWriter {
        match self {
            ConsoleStream::Stdout => BoxMakeWriter::new(io::stdout),
            ConsoleStream::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

/// Shared in-memory destination.
///
/// Cloning hands out another view of the same buffer, so a test can keep
/// one clone and give another to a sink.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buffer = self.inner.lock().expect("memory buffer mutex poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Completed lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .expect("memory buffer mutex poisoned")
            .is_empty()
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.inner.lock().expect("memory buffer mutex poisoned");
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryBuffer {
    type Writer = MemoryBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
