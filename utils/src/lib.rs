//! Shared unit conversions and number formatting for the dashboard widgets.

pub mod format;
pub mod units;

pub use format::{
    floor_one_digit, format_decimals, format_one_decimal, format_percent_no_decimals,
    format_zero_decimals, group_thousands,
};
pub use units::{eth_from_gwei, eth_from_wei, gwei_from_wei, u256_to_f64};
