//! Crate-level error types.

use std::fmt;

/// An option value that can never produce a sane camera.
///
/// Raised by [`Options::validate`](crate::options::Options::validate) at
/// configuration time. The per-tick path never sees these.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min_distance` is greater than `max_distance`.
    DistanceRange {
        /// Configured minimum distance.
        min: f32,
        /// Configured maximum distance.
        max: f32,
    },
    /// `vertical_min` is greater than `vertical_max`.
    VerticalRange {
        /// Configured lower pitch limit in degrees.
        min: f32,
        /// Configured upper pitch limit in degrees.
        max: f32,
    },
    /// The per-tick position lerp fraction is outside `(0, 1]`.
    PositionLerp(f32),
    /// A field that must be zero or positive was negative.
    Negative {
        /// Dotted field path, e.g. `zoom.zoom_speed`.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A field holds NaN or infinity.
    NotFinite {
        /// Dotted field path, e.g. `rotation.rotate_speed`.
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DistanceRange { min, max } => write!(
                f,
                "min_distance ({min}) is greater than max_distance ({max})"
            ),
            Self::VerticalRange { min, max } => write!(
                f,
                "vertical_min ({min}) is greater than vertical_max ({max})"
            ),
            Self::PositionLerp(v) => {
                write!(f, "position_lerp must be in (0, 1], got {v}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::NotFinite { field } => write!(f, "{field} is not finite"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Options failed validation.
    Config(ConfigError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// An inspector addressed a section or field that does not exist.
    UnknownField {
        /// Options section name, e.g. `zoom`.
        section: String,
        /// Field name inside the section.
        field: String,
    },
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid camera options: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownField { section, field } => {
                write!(f, "unknown option {section}.{field}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for VantageError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
