//! Numbers behind the burn/issuance gauges, the scarcity bar and the
//! flippening progress bars.

pub mod config;
mod flippening;
mod gauge;
mod scarcity;

pub use config::GaugeConfig;
pub use flippening::{flippening_progress, FlippeningProgress, MarketCaps};
pub use gauge::{
    gauge_max, gauge_progress, issuance_per_day, issuance_per_year, Gauge, Unit, UnitParseError,
};
pub use scarcity::{share_of_total, ScarcityShares};
