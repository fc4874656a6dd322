//! Error types for parsing boundaries and settings.
//!
//! The formatters themselves never fail; these errors only surface when a
//! caller asks for a strict parse of a key or loads configuration.

use thiserror::Error;

/// A metric kind key was not one of the five dashboard kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown metric kind: {0}")]
pub struct ParseMetricKindError(pub String);

/// A resource type name is outside the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown resource type: {0}")]
pub struct ParseResourceTypeError(pub String);

/// Errors that can occur when loading [`Settings`](crate::Settings).
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The config file or environment could not be read or deserialised.
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),

    /// Settings were read but violate a constraint.
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
