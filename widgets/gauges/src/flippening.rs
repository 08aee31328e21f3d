//! Progress of ETH's market cap towards other monetary assets.

use serde::{Deserialize, Serialize};

/// Market caps in USD, as served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCaps {
    pub eth_market_cap: f64,
    pub btc_market_cap: f64,
    pub gold_market_cap: f64,
    pub usd_m3_market_cap: f64,
}

/// ETH's market cap as a fraction of `other_cap`. Not capped at 1: past 1 the flippening happened.
pub fn flippening_progress(eth_cap: Option<f64>, other_cap: Option<f64>) -> f64 {
    match (eth_cap, other_cap) {
        (Some(eth), Some(other)) if other > 0.0 => eth / other,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlippeningProgress {
    pub btc: f64,
    pub gold: f64,
    pub usd_m3: f64,
}

impl FlippeningProgress {
    /// All bars sit at zero while market caps are loading.
    pub fn new(caps: Option<&MarketCaps>) -> Self {
        let eth = caps.map(|c| c.eth_market_cap);
        Self {
            btc: flippening_progress(eth, caps.map(|c| c.btc_market_cap)),
            gold: flippening_progress(eth, caps.map(|c| c.gold_market_cap)),
            usd_m3: flippening_progress(eth, caps.map(|c| c.usd_m3_market_cap)),
        }
    }
}
