//! Timestamp rendering shared by both line templates.

use chrono::{DateTime, Local};

/// Current wall-clock time, rendered for a log line.
pub fn now() -> String {
    render(Local::now())
}

/// `YYYY-MM-DD HH:MM:SS,mmm` (millisecond precision, comma separator).
fn render(time: DateTime<Local>) -> String {
    format!(
        "{},{:03}",
        time.format("%Y-%m-%d %H:%M:%S"),
        time.timestamp_subsec_millis()
    )
}
