//! Configuration types for the gauges.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the burn and issuance gauges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Upper end of the ETH dial, in millions of ETH per year
    #[serde(default = "default_eth_dial_floor")]
    pub eth_dial_floor: f64,
    /// Smallest upper end of the USD dial, in billions of USD per year
    #[serde(default = "default_usd_dial_floor")]
    pub usd_dial_floor: f64,
    /// Days used to annualize daily issuance
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,
}

fn default_eth_dial_floor() -> f64 {
    10.0
}

fn default_usd_dial_floor() -> f64 {
    20.0
}

fn default_days_per_year() -> f64 {
    365.25
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            eth_dial_floor: default_eth_dial_floor(),
            usd_dial_floor: default_usd_dial_floor(),
            days_per_year: default_days_per_year(),
        }
    }
}

impl GaugeConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse gauge config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GaugeConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GaugeConfig::default());
        assert_eq!(config.eth_dial_floor, 10.0);
        assert_eq!(config.usd_dial_floor, 20.0);
        assert_eq!(config.days_per_year, 365.25);
    }

    #[test]
    fn test_from_json_overrides() {
        let config = GaugeConfig::from_json_str(r#"{"usd_dial_floor": 50, "days_per_year": 365}"#)
            .unwrap();
        assert_eq!(config.eth_dial_floor, 10.0);
        assert_eq!(config.usd_dial_floor, 50.0);
        assert_eq!(config.days_per_year, 365.0);
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = GaugeConfig::from_json_str(r#"{"eth_dial_floor": "ten"}"#).unwrap_err();
        assert!(err.to_string().contains("gauge config"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = GaugeConfig::from_file("/nonexistent/gauges.json").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
