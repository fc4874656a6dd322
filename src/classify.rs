//! Success-rate classification into qualitative status bands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status band for a success ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessRateClass {
    Poor,
    Ok,
    Good,
}

impl SuccessRateClass {
    /// Band name: `"poor"`, `"ok"` or `"good"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuccessRateClass::Poor => "poor",
            SuccessRateClass::Ok => "ok",
            SuccessRateClass::Good => "good",
        }
    }

    /// CSS class used by the dashboard, e.g. `"status-poor"`.
    pub fn class_name(&self) -> &'static str {
        match self {
            SuccessRateClass::Poor => "status-poor",
            SuccessRateClass::Ok => "status-ok",
            SuccessRateClass::Good => "status-good",
        }
    }
}

impl fmt::Display for SuccessRateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds of the `ok` and `good` bands.
///
/// Each band is half-open: `[0, poor_below)` is poor, `[poor_below,
/// ok_below)` is ok, and everything from `ok_below` up is good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SrThresholds {
    pub poor_below: f64,
    pub ok_below: f64,
}

impl Default for SrThresholds {
    fn default() -> Self {
        Self {
            poor_below: 0.9,
            ok_below: 0.95,
        }
    }
}

impl SrThresholds {
    /// Classify a success ratio. A NaN ratio fails both comparisons and
    /// lands in [`SuccessRateClass::Good`].
    pub fn classify(&self, success_ratio: f64) -> SuccessRateClass {
        if success_ratio < self.poor_below {
            SuccessRateClass::Poor
        } else if success_ratio < self.ok_below {
            SuccessRateClass::Ok
        } else {
            SuccessRateClass::Good
        }
    }
}

/// Classify a success ratio with the default 0.9 / 0.95 bands.
pub fn get_sr_classification(success_ratio: f64) -> SuccessRateClass {
    SrThresholds::default().classify(success_ratio)
}
