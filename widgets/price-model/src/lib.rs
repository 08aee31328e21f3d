//! Implied ETH price model.
//!
//! Maps the growth-profile slider onto a logarithmic P/E range and combines it
//! with burn, issuance and supply figures into an implied price.

pub mod config;
mod markers;
mod model;
pub mod scale;
mod types;

pub use config::PriceModelConfig;
pub use markers::{CompanyPeRatios, PeMarker};
pub use model::{
    annualized_costs, annualized_earnings, annualized_revenue, earnings_per_share, eth_pe_ratio,
    projected_price, MarketInputs, PriceModel,
};
pub use scale::{LinearScale, LogScale, ScaleError};
pub use types::PriceModelSnapshot;
