//! Latency formatting with automatic µs / ms / s unit selection.

use tracing::trace;

use super::numeric::{add_commas, number_to_string, parse_float, PLACEHOLDER};
use super::si::format_si;

/// Format a latency given in seconds.
///
/// - absent or NaN: `"---"`
/// - exactly zero: `"0 s"`
/// - below 1ms: whole microseconds, e.g. `"500 µs"`
/// - below 1s: whole milliseconds, e.g. `"250 ms"`
/// - otherwise: three significant digits with SI prefix, e.g. `"12.3 s"`
pub fn format_latency_sec(latency: Option<f64>) -> String {
    let Some(seconds) = latency.filter(|s| !s.is_nan()) else {
        trace!(?latency, "latency is absent or not a number");
        return PLACEHOLDER.to_string();
    };

    if seconds == 0.0 {
        "0 s".to_string()
    } else if seconds < 0.001 {
        format!("{} µs", nice_latency(seconds * 1000.0 * 1000.0))
    } else if seconds < 1.0 {
        format!("{} ms", nice_latency(seconds * 1000.0))
    } else {
        format!("{} s", format_si(seconds, 3))
    }
}

/// Format a latency given as text in seconds, e.g. `"0.25"`.
///
/// Only the leading numeric part is read; text with no numeric prefix
/// renders as `"---"`.
pub fn format_latency_sec_str(latency: &str) -> String {
    format_latency_sec(parse_float(latency))
}

/// Format a latency given in milliseconds.
pub fn format_latency_ms(latency: Option<f64>) -> String {
    match latency {
        Some(ms) => format_latency_sec(Some(ms / 1000.0)),
        None => PLACEHOLDER.to_string(),
    }
}

fn nice_latency(value: f64) -> String {
    add_commas(&number_to_string(value.round()))
}
