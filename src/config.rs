//! Runtime configuration
//!
//! Loaded from a JSON file. Every key is optional; missing keys fall back to
//! the defaults in [`crate::consts`], so a minimal file can override just the
//! values you care about:
//!
//! ```json
//! { "params": { "gravity": 0.6 }, "upgrades": { "impulse": 2 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, STEPS_PER_SECOND};
use crate::error::ConfigError;
use crate::sim::{FixedStep, LaunchParams};
use crate::upgrades::Upgrades;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base launch parameters (before upgrades)
    pub params: LaunchParams,
    /// Upgrade levels owned at startup
    pub upgrades: Upgrades,
    /// Host steps per second
    pub steps_per_second: u32,
    /// Maximum steps per host frame
    pub max_substeps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: LaunchParams::default(),
            upgrades: Upgrades::default(),
            steps_per_second: STEPS_PER_SECOND,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Config {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.effective_params().validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{} ({}); using default config", e, path.display());
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Base parameters with upgrades applied
    pub fn effective_params(&self) -> LaunchParams {
        self.upgrades.apply(&self.params)
    }

    /// Frame clock matching this config
    pub fn clock(&self) -> FixedStep {
        FixedStep::new(self.steps_per_second, self.max_substeps)
    }
}
