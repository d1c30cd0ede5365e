//! Configuration and parameter errors.
//!
//! The simulator itself never fails: invalid-state calls are no-ops. Errors
//! only surface where outside data enters the crate, i.e. when launch
//! parameters are validated or a config file is loaded.

use std::fmt;

/// A launch parameter outside its allowed range
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Value is NaN or infinite
    NotFinite { field: &'static str },
    /// Value must be strictly positive
    NotPositive { field: &'static str, value: f32 },
    /// Friction coefficients must lie in (0, 1)
    FrictionOutOfRange { field: &'static str, value: f32 },
    /// Restitution must lie in (0, 1)
    RestitutionOutOfRange { value: f32 },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NotFinite { field } => write!(f, "{field} must be finite"),
            ParamError::NotPositive { field, value } => {
                write!(f, "{field} must be > 0 (got {value})")
            }
            ParamError::FrictionOutOfRange { field, value } => {
                write!(f, "{field} must be in (0, 1) (got {value})")
            }
            ParamError::RestitutionOutOfRange { value } => {
                write!(f, "restitution must be in (0, 1) (got {value})")
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Failure loading a [`crate::Config`]
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for the config schema
    Parse(serde_json::Error),
    /// Config parsed but the resulting parameters are unusable
    Invalid(ParamError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        ConfigError::Invalid(e)
    }
}
