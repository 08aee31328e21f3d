//! Fixed decimal windows over a wei amount.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::U256;
use tracing::debug;
use utils::units::WEI_PER_ETH_U256;
use utils::{format_decimals, group_thousands};

use crate::error::SegmentError;

/// Decimals of an 18-decimal token such as ETH.
pub const ETH_DECIMALS: usize = 18;
/// Width of the fractional window shown right after the decimal point.
pub const HIGH_FRACTION_DIGITS: usize = 2;
/// Width of the trailing fractional window.
pub const LOW_FRACTION_DIGITS: usize = 16;

const LOW_FRACTION_MODULUS: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);
const HIGH_FRACTION_MODULUS: U256 = U256::from_limbs([100, 0, 0, 0]);

/// A wei amount split into display windows.
///
/// For `119144277858326743920488300` wei:
/// - `whole`: `119144277`, every digit except the last 18
/// - `high_fraction`: `85`, the two digits before the last 16
/// - `low_fraction`: `8326743920488300`, the last 16 digits
///
/// Concatenating the windows, zero-padded to their widths, gives back the
/// original digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EthSegments {
    whole: U256,
    high_fraction: u8,
    low_fraction: u64,
}

impl EthSegments {
    /// Splits an amount given as its exact decimal digits.
    ///
    /// Fewer than 18 digits is fine: the missing high-order windows are zero.
    ///
    /// # Errors
    /// `SegmentError::InvalidAmount` when `amount` is empty, contains anything
    /// other than ASCII digits, or does not fit in 256 bits.
    pub fn from_wei_str(amount: &str) -> Result<Self, SegmentError> {
        if amount.is_empty() {
            debug!("rejecting empty amount");
            return Err(SegmentError::invalid(amount, "empty amount"));
        }
        if !amount.bytes().all(|b| b.is_ascii_digit()) {
            debug!(amount, "rejecting non-decimal amount");
            return Err(SegmentError::invalid(amount, "expected decimal digits only"));
        }

        let wei = U256::from_str_radix(amount, 10)
            .map_err(|_| SegmentError::invalid(amount, "does not fit in 256 bits"))?;
        Ok(Self::from(wei))
    }

    pub(crate) fn from_parts(whole: U256, high_fraction: u8, low_fraction: u64) -> Self {
        Self {
            whole,
            high_fraction,
            low_fraction,
        }
    }

    /// Whole tokens.
    pub fn whole(&self) -> U256 {
        self.whole
    }

    /// The two fractional digits right after the decimal point, in `[0, 99]`.
    pub fn high_fraction(&self) -> u8 {
        self.high_fraction
    }

    /// The last sixteen fractional digits, in `[0, 10^16 - 1]`.
    pub fn low_fraction(&self) -> u64 {
        self.low_fraction
    }

    pub fn whole_formatted(&self) -> String {
        group_thousands(&self.whole.to_string())
    }

    pub fn high_fraction_formatted(&self) -> String {
        format_decimals(u64::from(self.high_fraction), HIGH_FRACTION_DIGITS)
    }

    pub fn low_fraction_formatted(&self) -> String {
        format_decimals(self.low_fraction, LOW_FRACTION_DIGITS)
    }

    /// Reassembles the amount in wei.
    pub fn to_wei(&self) -> U256 {
        self.whole * WEI_PER_ETH_U256
            + U256::from(self.high_fraction) * LOW_FRACTION_MODULUS
            + U256::from(self.low_fraction)
    }

    /// Canonical decimal digits of the amount: no leading zeros, `"0"` for zero.
    pub fn to_wei_string(&self) -> String {
        self.to_wei().to_string()
    }
}

impl From<U256> for EthSegments {
    fn from(wei: U256) -> Self {
        let whole = wei / WEI_PER_ETH_U256;
        // Both windows are bounded by their modulus, so the narrowing is exact.
        let high_fraction = ((wei / LOW_FRACTION_MODULUS) % HIGH_FRACTION_MODULUS).to::<u8>();
        let low_fraction = (wei % LOW_FRACTION_MODULUS).to::<u64>();
        Self {
            whole,
            high_fraction,
            low_fraction,
        }
    }
}

impl FromStr for EthSegments {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wei_str(s)
    }
}

impl fmt::Display for EthSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}{:016}",
            self.whole_formatted(),
            self.high_fraction,
            self.low_fraction
        )
    }
}
