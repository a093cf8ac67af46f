//! Sink isolation, thresholds, and concurrent emission.

mod common;

use std::sync::Arc;
use std::thread;

use call_logger::{LevelFilter, LineFormat, Logged, MemoryBuffer, Sink};

use common::{divide, memory_sink};

#[test]
fn test_independent_sinks_do_not_cross_talk() {
    let (active, active_buffer) = memory_sink("my_module", LineFormat::Simple);
    let (_idle, idle_buffer) = memory_sink("app", LineFormat::Detailed);

    let wrapped = Logged::new(active, "divide", |(a, b)| divide(a, b));
    let _ = wrapped.call((4, 0));

    assert_eq!(active_buffer.lines().len(), 2);
    assert!(idle_buffer.is_empty());
}

#[test]
fn test_threshold_applies_to_wrapper_records() {
    let buffer = MemoryBuffer::new();
    let sink = Sink::builder("quiet")
        .min_level(LevelFilter::WARN)
        .memory(buffer.clone(), LineFormat::Simple)
        .build();
    let wrapped = Logged::new(Arc::new(sink), "divide", |(a, b)| divide(a, b));

    assert_eq!(wrapped.call((10, 2)), Ok(5));
    // Trace records fall below the warn threshold.
    assert!(buffer.is_empty());

    let _ = wrapped.call((1, 0));
    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[ERROR]"));
}

#[test]
fn test_concurrent_calls_emit_whole_lines() {
    let (sink, buffer) = memory_sink("my_module", LineFormat::Simple);
    let wrapped = Arc::new(Logged::new(sink, "divide", |(a, b): (i64, i64)| {
        divide(a, b)
    }));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let wrapped = wrapped.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    let _ = wrapped.call((i, 1));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 200);
    assert!(lines
        .iter()
        .all(|line| line.contains("Calling divide with args: (")));
}
