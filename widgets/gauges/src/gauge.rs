//! Burn and issuance gauges.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utils::{format_one_decimal, format_zero_decimals};

use crate::config::GaugeConfig;

/// Denomination the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Eth,
    Usd,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit {0:?}, expected \"eth\" or \"usd\"")]
pub struct UnitParseError(String);

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eth" => Ok(Unit::Eth),
            "usd" => Ok(Unit::Usd),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

impl Unit {
    /// Magnitude suffix of the gauge readout: millions of ETH, billions of USD.
    pub fn gauge_suffix(self) -> &'static str {
        match self {
            Unit::Eth => "M",
            Unit::Usd => "B",
        }
    }

    pub fn per_year_label(self) -> &'static str {
        match self {
            Unit::Eth => "ETH/year",
            Unit::Usd => "USD/year",
        }
    }
}

/// Upper end of the gauge dial.
///
/// The USD dial scales with the ETH price so it keeps the same proportions
/// as the ETH dial; without a price it falls back to the USD floor.
pub fn gauge_max(config: &GaugeConfig, unit: Unit, eth_price_usd: Option<f64>) -> f64 {
    let (pre_max, floor) = match unit {
        Unit::Eth => (config.eth_dial_floor, config.eth_dial_floor),
        Unit::Usd => (
            eth_price_usd.map_or(0.0, |price| config.eth_dial_floor * price / 1e3),
            config.usd_dial_floor,
        ),
    };
    f64::max(pre_max, floor).round()
}

/// Needle position in `[0, 1]`. A missing or NaN value reads as zero.
pub fn gauge_progress(value: Option<f64>, min: f64, max: f64) -> f64 {
    if !(max > min) {
        return 0.0;
    }
    let value = match value {
        Some(v) if !v.is_nan() => v,
        Some(_) => {
            debug!("NaN gauge value, reading as zero");
            0.0
        }
        None => 0.0,
    };
    value.clamp(min, max) / (max - min)
}

/// ETH issued per day. After the merge only proof of stake issues.
pub fn issuance_per_day(pos_per_day: f64, pow_per_day: f64, simulate_merge: bool) -> f64 {
    if simulate_merge {
        pos_per_day
    } else {
        pow_per_day + pos_per_day
    }
}

/// Yearly issuance as shown on the gauge: millions of ETH, or billions of USD.
///
/// The gauge stays in its loading state until the average ETH price for the
/// time frame is known, so this is `None` without it in either unit.
pub fn issuance_per_year(
    config: &GaugeConfig,
    issuance_per_day: f64,
    unit: Unit,
    average_eth_price_usd: Option<f64>,
) -> Option<f64> {
    let price = average_eth_price_usd?;
    let per_year = issuance_per_day * config.days_per_year;
    Some(match unit {
        Unit::Eth => per_year / 1e6,
        Unit::Usd => per_year * price / 1e9,
    })
}

/// A gauge ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub unit: Unit,
    pub value: Option<f64>,
    pub max: f64,
    pub progress: f64,
}

impl Gauge {
    pub fn new(
        config: &GaugeConfig,
        unit: Unit,
        value: Option<f64>,
        eth_price_usd: Option<f64>,
    ) -> Self {
        let max = gauge_max(config, unit, eth_price_usd);
        Self {
            unit,
            value,
            max,
            progress: gauge_progress(value, 0.0, max),
        }
    }

    /// Readout under the needle, e.g. `"1.2M"` or `"35B"`. `None` while loading.
    pub fn readout(&self) -> Option<String> {
        let value = self.value?;
        let number = match self.unit {
            Unit::Eth => format_one_decimal(value),
            Unit::Usd => format_zero_decimals(value),
        };
        Some(format!("{}{}", number, self.unit.gauge_suffix()))
    }

    /// Caption under the readout.
    pub fn caption(&self) -> &'static str {
        self.unit.per_year_label()
    }
}
