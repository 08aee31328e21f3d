//! Configuration types for the price model.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scale::{
    LinearScale, LogScale, ScaleError, GROWTH_PROFILE_MAX, GROWTH_PROFILE_MIN,
    MONETARY_PREMIUM_MAX, MONETARY_PREMIUM_MIN, MONETARY_PREMIUM_STEP,
};

/// Configuration for PriceModel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModelConfig {
    /// ETH issued per year under proof of stake, the cost side of earnings
    pub pos_issuance_per_year_eth: f64,
    /// Lowest P/E on the growth-profile slider
    #[serde(default = "default_growth_profile_min")]
    pub growth_profile_min: f64,
    /// Highest P/E on the growth-profile slider
    #[serde(default = "default_growth_profile_max")]
    pub growth_profile_max: f64,
    /// Lowest monetary premium multiplier
    #[serde(default = "default_monetary_premium_min")]
    pub monetary_premium_min: f64,
    /// Highest monetary premium multiplier
    #[serde(default = "default_monetary_premium_max")]
    pub monetary_premium_max: f64,
    /// Monetary premium slider increment
    #[serde(default = "default_monetary_premium_step")]
    pub monetary_premium_step: f64,
    /// P/E gap below which a company marker next to ETH is hidden
    #[serde(default = "default_marker_min_gap")]
    pub marker_min_gap: f64,
}

fn default_growth_profile_min() -> f64 {
    GROWTH_PROFILE_MIN
}

fn default_growth_profile_max() -> f64 {
    GROWTH_PROFILE_MAX
}

fn default_monetary_premium_min() -> f64 {
    MONETARY_PREMIUM_MIN
}

fn default_monetary_premium_max() -> f64 {
    MONETARY_PREMIUM_MAX
}

fn default_monetary_premium_step() -> f64 {
    MONETARY_PREMIUM_STEP
}

fn default_marker_min_gap() -> f64 {
    4.0
}

impl PriceModelConfig {
    /// Dashboard defaults for everything but the issuance figure.
    pub fn new(pos_issuance_per_year_eth: f64) -> Self {
        Self {
            pos_issuance_per_year_eth,
            growth_profile_min: GROWTH_PROFILE_MIN,
            growth_profile_max: GROWTH_PROFILE_MAX,
            monetary_premium_min: MONETARY_PREMIUM_MIN,
            monetary_premium_max: MONETARY_PREMIUM_MAX,
            monetary_premium_step: MONETARY_PREMIUM_STEP,
            marker_min_gap: default_marker_min_gap(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse price model config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn growth_scale(&self) -> Result<LogScale, ScaleError> {
        LogScale::new(self.growth_profile_min, self.growth_profile_max)
    }

    pub fn premium_scale(&self) -> Result<LinearScale, ScaleError> {
        LinearScale::new(
            self.monetary_premium_min,
            self.monetary_premium_max,
            self.monetary_premium_step,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_defaults() {
        let config = PriceModelConfig::from_json_str(r#"{"pos_issuance_per_year_eth": 600000}"#)
            .unwrap();
        assert_eq!(config, PriceModelConfig::new(600_000.0));
        assert_eq!(config.growth_scale().unwrap(), LogScale::growth_profile());
        assert_eq!(config.premium_scale().unwrap(), LinearScale::monetary_premium());
    }

    #[test]
    fn test_from_json_overrides() {
        let config = PriceModelConfig::from_json_str(
            r#"{"pos_issuance_per_year_eth": 1, "growth_profile_min": 2, "growth_profile_max": 100}"#,
        )
        .unwrap();
        let scale = config.growth_scale().unwrap();
        assert_eq!(scale.min(), 2.0);
        assert_eq!(scale.max(), 100.0);
    }

    #[test]
    fn test_from_json_requires_issuance() {
        let err = PriceModelConfig::from_json_str("{}").unwrap_err();
        assert!(err.to_string().contains("price model config"));
    }

    #[test]
    fn test_invalid_range_is_reported_by_scale() {
        let mut config = PriceModelConfig::new(1.0);
        config.growth_profile_min = 300.0;
        assert!(matches!(
            config.growth_scale(),
            Err(ScaleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let err = PriceModelConfig::from_file("/nonexistent/price-model.json").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
