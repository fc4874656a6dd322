//! Formatter settings loaded from an optional TOML file and the environment.
//!
//! # Configuration
//!
//! ```toml
//! request_rate_unit = " req/s"
//!
//! [success_rate]
//! poor_below = 0.9
//! ok_below = 0.95
//! ```
//!
//! Any key can be overridden from the environment with the `DASHFMT` prefix
//! and `__` as the nesting separator, e.g. `DASHFMT__SUCCESS_RATE__OK_BELOW=0.97`.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::SrThresholds;
use crate::error::SettingsError;
use crate::format::REQUEST_RATE_UNIT;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "DASHFMT";

/// Tunable formatting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Success-rate band thresholds.
    pub success_rate: SrThresholds,
    /// Unit appended to request rates.
    pub request_rate_unit: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            success_rate: SrThresholds::default(),
            request_rate_unit: REQUEST_RATE_UNIT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (if given and present) and the environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        debug!(?settings, "loaded settings");
        Ok(settings)
    }

    /// Check that the success-rate bands are ordered within `[0, 1]`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let SrThresholds {
            poor_below,
            ok_below,
        } = self.success_rate;

        if !(0.0..=1.0).contains(&poor_below) || !(0.0..=1.0).contains(&ok_below) {
            return Err(SettingsError::Invalid(format!(
                "success rate thresholds must be within [0, 1], got {poor_below} and {ok_below}"
            )));
        }
        if poor_below > ok_below {
            return Err(SettingsError::Invalid(format!(
                "poor_below ({poor_below}) must not exceed ok_below ({ok_below})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.request_rate_unit, " RPS");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_toml(
            r#"
request_rate_unit = " req/s"

[success_rate]
ok_below = 0.97
"#,
        );
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.request_rate_unit, " req/s");
        assert_eq!(settings.success_rate.poor_below, 0.9);
        assert_eq!(settings.success_rate.ok_below, 0.97);
    }

    #[test]
    fn malformed_file_fails() {
        let file = write_toml("[success_rate\npoor_below = ");
        let result = Settings::load(Some(file.path()));
        assert!(matches!(result, Err(SettingsError::Config(_))));
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let file = write_toml("[success_rate]\npoor_below = 0.99\nok_below = 0.9\n");
        let result = Settings::load(Some(file.path()));
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn out_of_range_thresholds_are_rejected() {
        let settings = Settings {
            success_rate: SrThresholds {
                poor_below: -0.1,
                ok_below: 0.5,
            },
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
