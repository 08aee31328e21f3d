//! Scarcity bar: how the issued ETH splits into burned, staked and locked.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// `part / total`, or 0 when there is no total.
pub fn share_of_total(part: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        debug!(part, total, "no total to share against");
        return 0.0;
    }
    part / total
}

/// Percentages for the scarcity bar.
///
/// The full bar is everything ever issued, taken as burned + current supply.
/// Staked and locked are relative to the current supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScarcityShares {
    pub burned_percent: f64,
    pub supply_percent: f64,
    pub staked_percent: f64,
    pub locked_percent: f64,
}

impl ScarcityShares {
    /// All amounts in the same unit, typically millions of ETH.
    pub fn new(staked: f64, locked: f64, supply: f64, burned: f64) -> Self {
        let total_issued = burned + supply;
        let burned_percent = share_of_total(burned, total_issued) * 100.0;
        Self {
            burned_percent,
            supply_percent: 100.0 - burned_percent,
            staked_percent: share_of_total(staked, supply) * 100.0,
            locked_percent: share_of_total(locked, supply) * 100.0,
        }
    }

    /// Width of the supply section, as a percent of the full bar.
    pub fn supply_width_percent(&self) -> f64 {
        self.supply_percent
    }
}
