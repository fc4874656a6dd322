//! # dashfmt
//!
//! Presentation helpers for a service-mesh monitoring dashboard: metric
//! formatting, resource-type name normalization, endpoint rendering and
//! success-rate banding.
//!
//! Every function is pure and total. Bad input degrades to a placeholder
//! string (`"---"` for an absent value, `"N/A"` for NaN in the generic
//! formatter) or passes through unchanged (unknown resource names), never to
//! an error.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         dashfmt                              │
//! │  ┌────────────┐  ┌────────────┐  ┌──────────┐  ┌──────────┐  │
//! │  │   format   │  │  resource  │  │ address  │  │ classify │  │
//! │  │ (numbers)  │  │  (names)   │  │ (ip:port)│  │ (bands)  │  │
//! │  └─────┬──────┘  └────────────┘  └──────────┘  └────┬─────┘  │
//! │        │                                            │        │
//! │        └──────────────◀ settings ▶──────────────────┘        │
//! │                  (unit, thresholds)                          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`format`]**: counts, rates, percentages, latencies and SI-scaled values,
//!   plus the [`MetricKind`] dispatch table
//! - **[`resource`]**: singular/plural, short, camelCase and title forms of
//!   resource types
//! - **[`address`]**: integer-encoded IPv4 plus port as `a.b.c.d:port`
//! - **[`classify`]**: success ratio to `poor` / `ok` / `good`
//! - **[`settings`]**: optional file/environment overrides
//!
//! ## Usage
//!
//! ```
//! use dashfmt::{
//!     display_name, format_latency_ms, get_sr_classification, MetricKind, Resource,
//!     SuccessRateClass,
//! };
//!
//! assert_eq!(MetricKind::RequestRate.format(Some(1500.0)), "1.5k RPS");
//! assert_eq!(MetricKind::SuccessRate.format(Some(0.9871)), "98.71%");
//! assert_eq!(format_latency_ms(Some(250.0)), "250 ms");
//! assert_eq!(format_latency_ms(None), "---");
//!
//! assert_eq!(display_name(&Resource::new("deployment", "web")), "deploy/web");
//! assert_eq!(get_sr_classification(0.92), SuccessRateClass::Ok);
//! ```

pub mod address;
pub mod classify;
pub mod error;
pub mod format;
pub mod resource;
pub mod settings;

// Re-export main types for convenience
pub use address::{decode_ip_to_octets, public_address_to_string};
pub use classify::{get_sr_classification, SrThresholds, SuccessRateClass};
pub use error::{ParseMetricKindError, ParseResourceTypeError, SettingsError};
pub use format::{
    add_commas, format_latency_ms, format_latency_sec, format_latency_sec_str, format_percent,
    format_rate, format_si, format_with_comma, metric_to_formatter, parse_float, round_number,
    style_num, MetricKind, NOT_AVAILABLE, PLACEHOLDER,
};
pub use resource::{
    display_name, friendly_title, is_resource, pod_owner_lookup, resource_type_to_camel_case,
    short_name_lookup, singular_resource, to_class_name, to_short_resource_name, FriendlyTitle,
    Resource, ResourceName, ResourceType,
};
pub use settings::Settings;

use std::cmp::Ordering;

/// Comparator for sortable metric columns; absent values sort as `-1`.
///
/// NaN sorts like an absent value, which keeps the order total.
pub fn numeric_sort(a: Option<f64>, b: Option<f64>) -> Ordering {
    let key = |v: Option<f64>| v.filter(|v| !v.is_nan()).unwrap_or(-1.0);
    key(a).total_cmp(&key(b))
}
