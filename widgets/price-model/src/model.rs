//! Implied price from burn revenue, issuance cost and a chosen P/E.

use alloy::primitives::U256;
use tracing::debug;
use utils::eth_from_wei;

use crate::config::PriceModelConfig;
use crate::markers::{self, CompanyPeRatios, PeMarker};
use crate::scale::{LinearScale, LogScale, ScaleError};
use crate::types::PriceModelSnapshot;

const MINUTES_PER_YEAR: f64 = 60.0 * 24.0 * 365.25;

/// Latest figures from the backend. Any of them may still be loading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarketInputs {
    /// Burn rate over all time, in USD per minute
    pub burn_rate_usd_per_minute: Option<f64>,
    /// Average ETH price over all time, in USD
    pub average_eth_price_usd: Option<f64>,
    /// Current ETH price, in USD
    pub eth_price_usd: Option<f64>,
    /// Current ETH supply, in wei
    pub eth_supply_wei: Option<U256>,
}

pub fn annualized_revenue(burn_rate_usd_per_minute: f64) -> f64 {
    burn_rate_usd_per_minute * MINUTES_PER_YEAR
}

pub fn annualized_costs(pos_issuance_per_year_eth: f64, average_eth_price_usd: f64) -> f64 {
    pos_issuance_per_year_eth * average_eth_price_usd
}

/// Revenue minus costs. Revenue waits on the average price too, so both sides
/// appear together.
pub fn annualized_earnings(inputs: &MarketInputs, pos_issuance_per_year_eth: f64) -> Option<f64> {
    let burn_rate = inputs.burn_rate_usd_per_minute?;
    let average_price = inputs.average_eth_price_usd?;
    Some(annualized_revenue(burn_rate) - annualized_costs(pos_issuance_per_year_eth, average_price))
}

/// Earnings per ETH in circulation. `None` for an empty supply.
pub fn earnings_per_share(annualized_earnings: f64, eth_supply_wei: U256) -> Option<f64> {
    if eth_supply_wei.is_zero() {
        return None;
    }
    Some(annualized_earnings / eth_from_wei(eth_supply_wei))
}

pub fn eth_pe_ratio(eth_price_usd: f64, earnings_per_share: f64) -> f64 {
    eth_price_usd / earnings_per_share
}

pub fn projected_price(earnings_per_share: f64, pe_ratio: f64, monetary_premium: f64) -> f64 {
    earnings_per_share * pe_ratio * monetary_premium
}

/// State behind the price model widget: two sliders plus the latest inputs.
///
/// The growth-profile slider starts at ETH's own P/E. It is seeded the first
/// time earnings and the ETH price are both known, and never again.
#[derive(Debug, Clone)]
pub struct PriceModel {
    growth_scale: LogScale,
    premium_scale: LinearScale,
    pos_issuance_per_year_eth: f64,
    marker_min_gap: f64,
    inputs: MarketInputs,
    growth_position: f64,
    monetary_premium: f64,
    initial_pe_set: bool,
    eth_pe_ratio: Option<f64>,
}

impl PriceModel {
    /// Creates a new `PriceModel`
    ///
    /// # Arguments
    /// * `config` - Slider ranges and the issuance figure
    ///
    /// # Returns
    /// The model with both sliders at their minimum, or the error of the first invalid slider range
    pub fn new(config: &PriceModelConfig) -> Result<Self, ScaleError> {
        let growth_scale = config.growth_scale()?;
        let premium_scale = config.premium_scale()?;
        Ok(Self {
            growth_scale,
            premium_scale,
            pos_issuance_per_year_eth: config.pos_issuance_per_year_eth,
            marker_min_gap: config.marker_min_gap,
            inputs: MarketInputs::default(),
            growth_position: 0.0,
            monetary_premium: premium_scale.min(),
            initial_pe_set: false,
            eth_pe_ratio: None,
        })
    }

    /// Takes in a fresh set of backend figures.
    pub fn observe(&mut self, inputs: MarketInputs) {
        self.inputs = inputs;

        if self.initial_pe_set {
            return;
        }
        let (Some(earnings), Some(eth_price)) = (self.annualized_earnings(), inputs.eth_price_usd)
        else {
            return;
        };

        // Seeding is attempted once, even when the supply is still missing.
        self.initial_pe_set = true;

        let Some(eps) = inputs
            .eth_supply_wei
            .and_then(|supply| earnings_per_share(earnings, supply))
        else {
            debug!("eth supply unavailable, growth profile left unseeded");
            return;
        };

        let pe = eth_pe_ratio(eth_price, eps);
        self.eth_pe_ratio = Some(pe);
        self.growth_position = self.growth_scale.to_linear(pe);
        debug!(pe, position = self.growth_position, "seeded growth profile");
    }

    /// Moves the growth-profile slider. Positions are clamped to `[0, 1]`.
    pub fn set_growth_position(&mut self, position: f64) {
        self.growth_position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
    }

    pub fn growth_position(&self) -> f64 {
        self.growth_position
    }

    /// P/E at the current slider position.
    pub fn growth_profile(&self) -> f64 {
        self.growth_scale.from_linear(self.growth_position)
    }

    /// Sets the monetary premium, snapped to the slider step.
    pub fn set_monetary_premium(&mut self, premium: f64) {
        self.monetary_premium = self.premium_scale.snap(premium);
    }

    pub fn monetary_premium(&self) -> f64 {
        self.monetary_premium
    }

    pub fn is_seeded(&self) -> bool {
        self.initial_pe_set
    }

    pub fn eth_pe_ratio(&self) -> Option<f64> {
        self.eth_pe_ratio
    }

    pub fn annualized_earnings(&self) -> Option<f64> {
        annualized_earnings(&self.inputs, self.pos_issuance_per_year_eth)
    }

    pub fn earnings_per_share(&self) -> Option<f64> {
        earnings_per_share(self.annualized_earnings()?, self.inputs.eth_supply_wei?)
    }

    /// Implied ETH price for the selected P/E and monetary premium.
    pub fn implied_price(&self) -> Option<f64> {
        Some(projected_price(
            self.earnings_per_share()?,
            self.growth_profile(),
            self.monetary_premium,
        ))
    }

    pub fn markers(&self, ratios: &CompanyPeRatios) -> Vec<PeMarker> {
        markers::layout(
            ratios,
            self.eth_pe_ratio,
            self.marker_min_gap,
            &self.growth_scale,
        )
    }

    pub fn snapshot(&self) -> PriceModelSnapshot {
        PriceModelSnapshot {
            annualized_earnings_usd: self.annualized_earnings(),
            eth_pe_ratio: self.eth_pe_ratio,
            growth_position: self.growth_position,
            growth_profile: self.initial_pe_set.then(|| self.growth_profile()),
            monetary_premium: self.monetary_premium,
            implied_price_usd: self.implied_price(),
        }
    }
}
