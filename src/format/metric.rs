//! Metric formatting: the generic scaled-unit formatter and the per-kind
//! dispatch table used by dashboard stat columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::latency::format_latency_ms;
use super::numeric::{
    add_commas, number_to_string, round_number, to_fixed, NOT_AVAILABLE, PLACEHOLDER,
};
use crate::error::ParseMetricKindError;

/// Unit appended to request rates.
pub const REQUEST_RATE_UNIT: &str = " RPS";

/// Shorten and style a number, appending `unit`.
///
/// With `truncate`, values above 999 are scaled by 1000s to three decimals
/// with a `k`/`M`/`G` suffix. Without it, values above 999 are rounded to
/// whole numbers and comma-grouped. Everything else keeps two decimals.
/// NaN renders as `"N/A"`.
///
/// ```
/// use dashfmt::style_num;
///
/// assert_eq!(style_num(1500.0, "", true), "1.5k");
/// assert_eq!(style_num(1500.0, "", false), "1,500");
/// assert_eq!(style_num(2_345_678.0, " RPS", true), "2.346M RPS");
/// ```
pub fn style_num(number: f64, unit: &str, truncate: bool) -> String {
    if number.is_nan() {
        return NOT_AVAILABLE.to_string();
    }

    let (scaled, magnitude) = if truncate && number > 999_999_999.0 {
        (round_number(number / 1_000_000_000.0, 3), "G")
    } else if truncate && number > 999_999.0 {
        (round_number(number / 1_000_000.0, 3), "M")
    } else if truncate && number > 999.0 {
        (round_number(number / 1_000.0, 3), "k")
    } else if number > 999.0 {
        (round_number(number, 0), "")
    } else {
        (round_number(number, 2), "")
    };

    format!("{}{magnitude}{unit}", add_commas(&number_to_string(scaled)))
}

/// Format a rate with a custom unit. Absent or NaN values render as `"---"`.
pub fn format_rate(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if !v.is_nan() => style_num(v, unit, true),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Render a success ratio as a percentage with two decimals, e.g. `"95.34%"`.
///
/// Absent or NaN values render as `"---"`.
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if !r.is_nan() => format!("{}%", to_fixed(r * 100.0, 2)),
        _ => PLACEHOLDER.to_string(),
    }
}

fn format_request_rate(value: Option<f64>) -> String {
    format_rate(value, REQUEST_RATE_UNIT)
}

/// The untruncated path only special-cases NaN; an absent value is fed
/// through the rounding and comes out as `"NaN"`.
fn format_untruncated(value: Option<f64>) -> String {
    match value {
        Some(v) => style_num(v, "", false),
        None => add_commas(&number_to_string(round_number(f64::NAN, 2))),
    }
}

fn format_no_unit(value: Option<f64>) -> String {
    format_rate(value, "")
}

/// The kind of metric shown in a stat column, selecting its formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricKind {
    /// Requests per second, truncated with an `" RPS"` unit.
    RequestRate,
    /// Success ratio in `[0, 1]`, rendered as a percentage.
    SuccessRate,
    /// Latency in milliseconds.
    Latency,
    /// Generic number without magnitude truncation.
    Untruncated,
    /// Generic truncated number without a unit.
    NoUnit,
}

impl MetricKind {
    /// All kinds, in dashboard column order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::RequestRate,
        MetricKind::SuccessRate,
        MetricKind::Latency,
        MetricKind::Untruncated,
        MetricKind::NoUnit,
    ];

    /// The key used for this kind by dashboard callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::RequestRate => "REQUEST_RATE",
            MetricKind::SuccessRate => "SUCCESS_RATE",
            MetricKind::Latency => "LATENCY",
            MetricKind::Untruncated => "UNTRUNCATED",
            MetricKind::NoUnit => "NO_UNIT",
        }
    }

    /// The formatter for this kind.
    pub fn formatter(&self) -> fn(Option<f64>) -> String {
        match self {
            MetricKind::RequestRate => format_request_rate,
            MetricKind::SuccessRate => format_percent,
            MetricKind::Latency => format_latency_ms,
            MetricKind::Untruncated => format_untruncated,
            MetricKind::NoUnit => format_no_unit,
        }
    }

    /// Format `value` with this kind's formatter.
    pub fn format(&self, value: Option<f64>) -> String {
        (self.formatter())(value)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = ParseMetricKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseMetricKindError(s.to_string()))
    }
}

/// Look up the formatter for a metric kind.
pub fn metric_to_formatter(kind: MetricKind) -> fn(Option<f64>) -> String {
    kind.formatter()
}
