//! Human readable renderings of sizes, speeds and progress.
//!
//! Units are binary (1024-based) and values are printed with two decimals:
//!
//! ```text
//! 0          -> "0 B"
//! 512        -> "512.00 B"
//! 1536       -> "1.50 KB"
//! 1048576    -> "1.00 MB"
//! ```
use torrust_swarm_primitives::NumberOfBytes;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

const SPEED_UNITS: [&str; 4] = ["B/s", "KB/s", "MB/s", "GB/s"];

#[must_use]
pub fn format_size(size: NumberOfBytes) -> String {
    #[allow(clippy::cast_precision_loss)]
    scale(size as f64, &SIZE_UNITS)
}

/// `bytes_per_second` is a rate, so it may be fractional.
#[must_use]
pub fn format_speed(bytes_per_second: f64) -> String {
    scale(bytes_per_second, &SPEED_UNITS)
}

/// Progress is a percentage in `[0, 100]`, rendered with one decimal.
#[must_use]
pub fn format_progress(progress: f64) -> String {
    format!("{progress:.1}%")
}

fn scale(value: f64, units: &[&str]) -> String {
    if value <= 0.0 || !value.is_finite() {
        return format!("0 {}", units[0]);
    }

    let mut value = value;
    let mut unit = 0;

    while value >= 1024.0 && unit < units.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", units[unit])
}
