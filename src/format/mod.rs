//! Number formatting for dashboard metrics.
//!
//! ## Submodules
//!
//! - [`numeric`]: Shared helpers (number-to-text, comma grouping, rounding, float parsing)
//! - [`si`]: SI-prefixed rendering with fixed significant digits
//! - [`latency`]: Latency rendering with µs / ms / s unit selection
//! - [`metric`]: The generic scaled-unit formatter and the [`MetricKind`] dispatch table
//!
//! ## Layering
//!
//! ```text
//! MetricKind::format()
//!        │
//!        ├──▶ style_num() / format_percent() ──┐
//!        │                                     ├──▶ round_number() + add_commas()
//!        └──▶ format_latency_ms() ──▶ format_latency_sec() ──▶ format_si()
//! ```

pub mod latency;
pub mod metric;
pub mod numeric;
pub mod si;

pub use latency::{format_latency_ms, format_latency_sec, format_latency_sec_str};
pub use metric::{
    format_percent, format_rate, metric_to_formatter, style_num, MetricKind, REQUEST_RATE_UNIT,
};
pub use numeric::{
    add_commas, format_with_comma, number_to_string, parse_float, round_number, to_fixed,
    NOT_AVAILABLE, PLACEHOLDER,
};
pub use si::format_si;
