//! Human-readable formatting helpers

use chrono::Local;

/// Format a byte count with 1024-byte unit steps and one decimal place.
///
/// The unit is the largest of B/KB/MB/GB where the value is at least 1.0,
/// falling back to bytes. Values beyond GB stay in GB.
pub fn size_string(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = if bytes.is_finite() && bytes > 0.0 {
        bytes
    } else {
        0.0
    };
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

/// Progress readout pair, e.g. "12.3 MB of 45.0 MB".
pub fn size_pair(done: f64, total: f64) -> String {
    format!("{} of {}", size_string(done), size_string(total))
}

/// Timestamp used to name new backup directories.
pub fn timestamp_name() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

/// Wall clock string for the top bar.
pub fn clock_string() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
