//! ETH denominations.

use alloy::primitives::U256;

pub const WEI_PER_ETH: f64 = 1e18;
pub const WEI_PER_GWEI: f64 = 1e9;
pub const GWEI_PER_ETH: f64 = 1e9;

pub const WEI_PER_ETH_U256: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);
pub const WEI_PER_GWEI_U256: U256 = U256::from_limbs([1_000_000_000, 0, 0, 0]);

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Converts a U256 value to f64, accounting for token decimals.
///
/// The result is approximate past 2^53 but never truncates: the whole and
/// fractional parts are converted limb by limb, so any magnitude is accepted.
pub fn u256_to_f64(value: U256, decimals: u32) -> f64 {
    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole_part = value / divisor;
    let fractional_part = value % divisor;
    limbs_to_f64(whole_part) + limbs_to_f64(fractional_part) / 10f64.powi(decimals as i32)
}

fn limbs_to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, &limb| acc * TWO_POW_64 + limb as f64)
}

pub fn eth_from_wei(wei: U256) -> f64 {
    u256_to_f64(wei, 18)
}

pub fn gwei_from_wei(wei: U256) -> f64 {
    u256_to_f64(wei, 9)
}

pub fn eth_from_gwei(gwei: f64) -> f64 {
    gwei / GWEI_PER_ETH
}
