//! Scan configuration — declarative detector selection, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::factory::{create_detector, FactoryError, DETECTOR_ORDER};
use crate::scan::Scanner;

/// Serializable configuration for a scan.
///
/// ```toml
/// detectors = ["liquidity_grab", "candlestick"]
/// today_only = true
/// ```
///
/// `detectors` lists detector names in scan order; the default is the full
/// canonical stack. `today_only` asks the caller to apply the same-day filter
/// ([`Scanner::scan_on`]) instead of a plain scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_detectors")]
    pub detectors: Vec<String>,
    #[serde(default)]
    pub today_only: bool,
}

fn default_detectors() -> Vec<String> {
    DETECTOR_ORDER.iter().map(|s| s.to_string()).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            detectors: default_detectors(),
            today_only: false,
        }
    }
}

/// Errors that can occur while reading a scan config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse scan config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ScanConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Build a [`Scanner`] with the configured detectors, in config order.
    pub fn build_scanner(&self) -> Result<Scanner, FactoryError> {
        let detectors = self
            .detectors
            .iter()
            .map(|name| create_detector(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Scanner::new(detectors))
    }
}
