//! Shared types for the price model.

use serde::{Deserialize, Serialize};
use utils::format_one_decimal;

/// Everything the price model widget displays, at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModelSnapshot {
    /// Burn revenue minus issuance cost over a year, in USD
    pub annualized_earnings_usd: Option<f64>,
    /// P/E implied by the current ETH price, fixed at the first observation
    pub eth_pe_ratio: Option<f64>,
    /// Growth-profile slider position in `[0, 1]`
    pub growth_position: f64,
    /// P/E selected on the growth-profile slider; `None` until the slider is seeded
    pub growth_profile: Option<f64>,
    /// Monetary premium multiplier
    pub monetary_premium: f64,
    /// Implied ETH price in USD
    pub implied_price_usd: Option<f64>,
}

impl PriceModelSnapshot {
    /// Renders the snapshot the way the widget labels it.
    pub fn to_message(&self) -> String {
        let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        format!(
            "annualized profits: {} USD\ngrowth profile: {} P/E\nmonetary premium: {}x\nimplied eth price: {} USD",
            or_dash(
                self.annualized_earnings_usd
                    .map(|usd| format!("{}B", format_one_decimal(usd / 1e9)))
            ),
            or_dash(self.growth_profile.map(format_one_decimal)),
            format_one_decimal(self.monetary_premium),
            or_dash(
                self.implied_price_usd
                    .map(|usd| format!("{}K", format_one_decimal(usd / 1e3)))
            ),
        )
    }
}
