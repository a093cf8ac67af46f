//! Shared fixtures for the integration tests.

use std::sync::Arc;

use call_logger::{LineFormat, MemoryBuffer, Sink};
use thiserror::Error;

/// Division error used by the wrapped fixture function.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DivideError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Fixture function: fails on a zero divisor.
pub fn divide(a: i64, b: i64) -> Result<i64, DivideError> {
    if b == 0 {
        return Err(DivideError::DivisionByZero);
    }
    Ok(a / b)
}

/// Sink writing to an assertable in-memory buffer.
pub fn memory_sink(name: &str, format: LineFormat) -> (Arc<Sink>, MemoryBuffer) {
    let buffer = MemoryBuffer::new();
    let sink = Sink::builder(name).memory(buffer.clone(), format).build();
    (Arc::new(sink), buffer)
}
