//! Precision-safe display of wei amounts.
//!
//! A supply of 119,144,277.858326743920488300 ETH is far past what an f64 can
//! hold exactly once expressed in wei. The amount is split into three fixed
//! decimal windows, each small enough to be animated as a plain integer.

mod counter;
mod error;
mod segments;

pub use counter::{Counter, SegmentsTween};
pub use error::SegmentError;
pub use segments::{EthSegments, ETH_DECIMALS, HIGH_FRACTION_DIGITS, LOW_FRACTION_DIGITS};
