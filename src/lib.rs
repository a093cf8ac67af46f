//! Function-call logging over explicit sinks.
//!
//! # Architecture Overview
//!
//! ```text
//! caller ──▶ Logged::call(args)
//!              │ trace record (target, args, kwargs)
//!              ▼
//!            Sink ──▶ severity filter ──▶ line template ──▶ destination
//!              ▲                          (format module)   (console, memory)
//!              │ error record (target, error) on failure
//!              │
//!            inner function ── Ok(v)  ──▶ returned unchanged
//!                           └─ Err(e) ──▶ logged, then returned unchanged
//! ```
//!
//! Sinks are explicit values shared by reference. Two independently
//! configured sinks never see each other's records, and the wrapper never
//! alters what the inner function returns or fails with.

// Core subsystems
pub mod call;
pub mod format;
pub mod sink;

// Cross-cutting concerns
pub mod config;

pub use call::{CallArguments, Invocation, Logged};
pub use config::Config;
pub use format::LineFormat;
pub use sink::{ConsoleStream, LevelFilter, MemoryBuffer, Sink, SinkBuilder, SinkError};
