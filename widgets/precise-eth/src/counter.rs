//! Linear count-up between two amounts.
//!
//! Every window of [`EthSegments`] is animated on its own, as a plain integer
//! counter without easing. A new target starts from whatever value is on
//! screen at that moment.
//!
//! All windows of a [`SegmentsTween`] share one linear progress value. A
//! dashboard that gives each window its own duration or easing calls
//! [`SegmentsTween::value_at`] per window and picks the matching field.

use alloy::primitives::U256;

use crate::segments::EthSegments;

/// Resolution of the progress value.
const PROGRESS_STEPS: u64 = 1_000_000_000;

fn progress_steps(progress: f64) -> u64 {
    if progress.is_nan() {
        return 0;
    }
    (progress.clamp(0.0, 1.0) * PROGRESS_STEPS as f64).round() as u64
}

/// A counter moving linearly from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    start: u64,
    end: u64,
}

impl Counter {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Value shown at `progress` (clamped to [0, 1]) through the animation.
    pub fn value_at(&self, progress: f64) -> u64 {
        let steps = u128::from(progress_steps(progress));
        let distance = u128::from(self.start.abs_diff(self.end));
        // distance < 2^64 and steps <= 10^9, so the product fits in u128.
        let travelled = (distance * steps / u128::from(PROGRESS_STEPS)) as u64;
        if self.end >= self.start {
            self.start + travelled
        } else {
            self.start - travelled
        }
    }
}

fn lerp_u256(start: U256, end: U256, steps: u64) -> U256 {
    let steps = U256::from(steps);
    let total = U256::from(PROGRESS_STEPS);
    if end >= start {
        start + (end - start).saturating_mul(steps) / total
    } else {
        start - (start - end).saturating_mul(steps) / total
    }
}

/// Animates every window of an amount independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentsTween {
    from: EthSegments,
    to: EthSegments,
}

impl SegmentsTween {
    pub fn new(from: EthSegments, to: EthSegments) -> Self {
        Self { from, to }
    }

    /// A tween that has already finished on `to`, used for the first render.
    pub fn settled(to: EthSegments) -> Self {
        Self { from: to, to }
    }

    pub fn target(&self) -> EthSegments {
        self.to
    }

    /// Segments displayed at `progress` through the animation.
    ///
    /// Windows are interpolated separately, so the intermediate value is not
    /// the interpolated amount. At 0 this is `from` and at 1 it is `to`.
    pub fn value_at(&self, progress: f64) -> EthSegments {
        let steps = progress_steps(progress);
        let high = Counter::new(
            u64::from(self.from.high_fraction()),
            u64::from(self.to.high_fraction()),
        );
        let low = Counter::new(self.from.low_fraction(), self.to.low_fraction());

        // Interpolating between two values in [0, 99] stays in [0, 99].
        EthSegments::from_parts(
            lerp_u256(self.from.whole(), self.to.whole(), steps),
            high.value_at(progress) as u8,
            low.value_at(progress),
        )
    }

    /// Starts a new animation towards `to` from the value shown at `progress`.
    pub fn retarget(&self, progress: f64, to: EthSegments) -> Self {
        Self::new(self.value_at(progress), to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(wei: &str) -> EthSegments {
        EthSegments::from_wei_str(wei).unwrap()
    }

    #[test]
    fn test_counter_endpoints_and_midpoint() {
        let counter = Counter::new(0, 100);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(0.5), 50);
        assert_eq!(counter.value_at(1.0), 100);

        let down = Counter::new(100, 0);
        assert_eq!(down.value_at(0.25), 75);
        assert_eq!(down.value_at(1.0), 0);
    }

    #[test]
    fn test_counter_clamps_progress() {
        let counter = Counter::new(10, 20);
        assert_eq!(counter.value_at(-1.0), 10);
        assert_eq!(counter.value_at(2.0), 20);
        assert_eq!(counter.value_at(f64::NAN), 10);
    }

    #[test]
    fn test_counter_full_sixteen_digit_window() {
        let counter = Counter::new(0, 9_999_999_999_999_999);
        assert_eq!(counter.value_at(1.0), 9_999_999_999_999_999);
        assert_eq!(counter.value_at(0.5), 4_999_999_999_999_999);
    }

    #[test]
    fn test_tween_endpoints() {
        let from = segments("119144277858326743920488300");
        let to = segments("119144280010000000000000000");
        let tween = SegmentsTween::new(from, to);

        assert_eq!(tween.value_at(0.0), from);
        assert_eq!(tween.value_at(1.0), to);
        assert_eq!(tween.target(), to);
    }

    #[test]
    fn test_tween_windows_move_independently() {
        let from = segments("1000000000000000000"); // 1.00
        let to = segments("3500000000000000000"); // 3.50
        let mid = SegmentsTween::new(from, to).value_at(0.5);

        assert_eq!(mid.whole(), U256::from(2u64));
        assert_eq!(mid.high_fraction(), 25);
        assert_eq!(mid.low_fraction(), 0);
    }

    #[test]
    fn test_tween_windows_share_progress() {
        let tween = SegmentsTween::new(
            segments("1000000000000000000"),
            segments("3500000000000000000"),
        );

        // One progress for every window.
        let shared = tween.value_at(0.5);
        assert_eq!(shared.whole(), U256::from(2u64));
        assert_eq!(shared.high_fraction(), 25);

        // Separate timelines pick each window from its own progress.
        let whole = tween.value_at(1.0).whole();
        let high = tween.value_at(0.2).high_fraction();
        assert_eq!(whole, U256::from(3u64));
        assert_eq!(high, 10);
    }

    #[test]
    fn test_tween_retarget_starts_from_shown_value() {
        let tween = SegmentsTween::new(segments("0"), segments("10000000000000000000"));
        let next = tween.retarget(0.5, segments("20000000000000000000"));

        assert_eq!(next.value_at(0.0).whole(), U256::from(5u64));
        assert_eq!(next.value_at(1.0).whole(), U256::from(20u64));
    }

    #[test]
    fn test_settled_tween_is_static() {
        let target = segments("42");
        let tween = SegmentsTween::settled(target);
        assert_eq!(tween.value_at(0.0), target);
        assert_eq!(tween.value_at(0.7), target);
    }
}
