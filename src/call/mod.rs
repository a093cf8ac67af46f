//! Call logging wrapper.
//!
//! # Data Flow
//! ```text
//! Logged::call(args)
//!     → trace record: "Calling <target> with args: .., kwargs: .."
//!     → inner function runs
//!     → Ok(v): v returned unchanged, nothing further emitted
//!     → Err(e): error record, then e returned unchanged
//! ```
//!
//! # Design Decisions
//! - The wrapper observes; it never alters values, errors, or control flow
//! - Errors pass through by value: no wrapping or translation layer
//! - Stateless per call; concurrent callers rely on the sink's destinations
//!   to serialize their own writes

pub mod invocation;

use std::fmt;
use std::sync::Arc;

use crate::sink::Sink;

pub use invocation::{CallArguments, Invocation};

/// How error records name their origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorContext {
    /// `An error occurred in <target>: <error>`
    Target,
    /// `An error occurred in function <target> in module <module> : <error:?>`
    Module(&'static str),
}

/// A function wrapped with entry and error logging.
///
/// Wraps any `Fn(Args) -> Result<T, E>`. The wrapper keeps the inner
/// function's calling convention and returns its results untouched; the
/// records written to the sink are its only observable effect.
pub struct Logged<F> {
    sink: Arc<Sink>,
    target: String,
    trace_calls: bool,
    context: ErrorContext,
    inner: F,
}

impl<F> Logged<F> {
    /// Wrap `inner`, logging every call and every failure to `sink`.
    pub fn new(sink: Arc<Sink>, target: impl Into<String>, inner: F) -> Self {
        Self {
            sink,
            target: target.into(),
            trace_calls: true,
            context: ErrorContext::Target,
            inner,
        }
    }

    /// Keep error records but drop the per-call trace record.
    pub fn errors_only(mut self) -> Self {
        self.trace_calls = false;
        self
    }

    /// Name the enclosing module in error records, switching the error
    /// rendering to its detailed (Debug) representation.
    pub fn in_module(mut self, module: &'static str) -> Self {
        self.context = ErrorContext::Module(module);
        self
    }

    /// Target name used in emitted records.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Invoke the wrapped function.
    ///
    /// Emits one trace record before the call (unless [`errors_only`]) and,
    /// if the call fails, one error record afterwards. The inner result or
    /// error is returned untouched either way.
    ///
    /// [`errors_only`]: Logged::errors_only
    pub fn call<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Result<T, E>,
        A: CallArguments,
        E: fmt::Display + fmt::Debug,
    {
        if self.trace_calls {
            let invocation = Invocation::capture(&self.target, &args);
            self.sink.trace(invocation);
        }

        match (self.inner)(args) {
            Ok(value) => Ok(value),
            Err(error) => {
                match self.context {
                    ErrorContext::Target => self
                        .sink
                        .error(format!("An error occurred in {}: {}", self.target, error)),
                    ErrorContext::Module(module) => self.sink.error(format!(
                        "An error occurred in function {} in module {} : {:?}",
                        self.target, module, error
                    )),
                }
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LineFormat;
    use crate::sink::MemoryBuffer;

    fn memory_sink(name: &str) -> (Arc<Sink>, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        let sink = Sink::builder(name)
            .memory(buffer.clone(), LineFormat::Simple)
            .build();
        (Arc::new(sink), buffer)
    }

    fn checked_divide(a: i64, b: i64) -> Result<i64, String> {
        if b == 0 {
            return Err("division by zero".to_owned());
        }
        Ok(a / b)
    }

    #[test]
    fn test_success_emits_one_trace_record() {
        let (sink, buffer) = memory_sink("my_module");
        let wrapped = Logged::new(sink, "divide", |(a, b)| checked_divide(a, b));

        assert_eq!(wrapped.call((10, 2)), Ok(5));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0]
            .contains("[TRACE] my_module: Calling divide with args: (10, 2), kwargs: {}"));
    }

    #[test]
    fn test_failure_emits_trace_then_error() {
        let (sink, buffer) = memory_sink("my_module");
        let wrapped = Logged::new(sink, "divide", |(a, b)| checked_divide(a, b));

        assert_eq!(
            wrapped.call((4, 0)),
            Err("division by zero".to_owned())
        );

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Calling divide with args: (4, 0), kwargs: {}"));
        assert!(lines[1].contains("[ERROR] my_module: An error occurred in divide: division by zero"));
    }

    #[test]
    fn test_errors_only_drops_the_trace_record() {
        let (sink, buffer) = memory_sink("my_module");
        let wrapped = Logged::new(sink, "divide", |(a, b)| checked_divide(a, b)).errors_only();

        assert_eq!(wrapped.call((10, 2)), Ok(5));
        assert!(buffer.is_empty());

        let _ = wrapped.call((1, 0));
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_module_context_uses_detailed_error_rendering() {
        let (sink, buffer) = memory_sink("my_module");
        let wrapped = Logged::new(sink, "divide", |(a, b)| checked_divide(a, b))
            .errors_only()
            .in_module(module_path!());

        let _ = wrapped.call((1, 0));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(&format!(
            "An error occurred in function divide in module {} : {:?}",
            module_path!(),
            "division by zero"
        )));
    }
}
