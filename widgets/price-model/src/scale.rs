//! Slider scales.

use tracing::debug;

pub const GROWTH_PROFILE_MIN: f64 = 6.0;
pub const GROWTH_PROFILE_MAX: f64 = 250.0;

pub const MONETARY_PREMIUM_MIN: f64 = 1.0;
pub const MONETARY_PREMIUM_MAX: f64 = 20.0;
pub const MONETARY_PREMIUM_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("invalid scale range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
    #[error("invalid slider step {0}")]
    InvalidStep(f64),
}

/// Logarithmic range `[min, max]` driven by a linear slider position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    min: f64,
    max: f64,
    log_min: f64,
    log_range: f64,
}

impl LogScale {
    /// Creates a log scale over `[min, max]`.
    ///
    /// # Errors
    /// `ScaleError::InvalidRange` unless `0 < min < max` and both are finite.
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleError> {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(ScaleError::InvalidRange { min, max });
        }
        let log_min = min.ln();
        Ok(Self {
            min,
            max,
            log_min,
            log_range: max.ln() - log_min,
        })
    }

    /// The P/E range of the growth-profile slider, 6 to 250.
    pub fn growth_profile() -> Self {
        let log_min = GROWTH_PROFILE_MIN.ln();
        Self {
            min: GROWTH_PROFILE_MIN,
            max: GROWTH_PROFILE_MAX,
            log_min,
            log_range: GROWTH_PROFILE_MAX.ln() - log_min,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Slider position of `value`, clamped to `[0, 1]`.
    ///
    /// Never fails: values below `min`, including zero, negatives and NaN,
    /// land on 0 and values above `max` land on 1.
    pub fn to_linear(&self, value: f64) -> f64 {
        if value.is_nan() || value <= 0.0 {
            debug!(value, "no logarithm for value, clamping to 0");
            return 0.0;
        }
        ((value.ln() - self.log_min) / self.log_range).clamp(0.0, 1.0)
    }

    /// Value at slider `position`.
    ///
    /// Positions outside `[0, 1]` are extrapolated, callers clamp first.
    pub fn from_linear(&self, position: f64) -> f64 {
        (position * self.log_range + self.log_min).exp()
    }
}

/// Linear range with a fixed step, as used by the monetary-premium slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
    step: f64,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ScaleError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ScaleError::InvalidRange { min, max });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(ScaleError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn monetary_premium() -> Self {
        Self {
            min: MONETARY_PREMIUM_MIN,
            max: MONETARY_PREMIUM_MAX,
            step: MONETARY_PREMIUM_STEP,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Relative position of `value` along the track. Not clamped, markers may sit off-track.
    pub fn ratio(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Value at `position` in `[0, 1]`.
    pub fn value_at(&self, position: f64) -> f64 {
        self.min + position.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Nearest value the slider can take.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(a: f64, b: f64) {
        assert!(
            ((a - b) / b).abs() < 1e-9,
            "{a} and {b} differ by more than 1e-9 relative"
        );
    }

    #[test]
    fn test_growth_profile_endpoints() {
        let scale = LogScale::growth_profile();
        assert_eq!(scale.to_linear(6.0), 0.0);
        assert_eq!(scale.to_linear(250.0), 1.0);
        assert_eq!(scale, LogScale::new(6.0, 250.0).unwrap());
    }

    #[test]
    fn test_growth_profile_midrange() {
        let scale = LogScale::growth_profile();
        // ln(50 / 6) / ln(250 / 6)
        assert!((scale.to_linear(50.0) - 0.568_480_8).abs() < 1e-6);
        assert_close(scale.from_linear(0.5), (6.0f64 * 250.0).sqrt());
    }

    #[test]
    fn test_to_linear_clamps() {
        let scale = LogScale::growth_profile();
        assert_eq!(scale.to_linear(1.0), 0.0);
        assert_eq!(scale.to_linear(1_000.0), 1.0);
        assert_eq!(scale.to_linear(f64::INFINITY), 1.0);
        assert_eq!(scale.to_linear(0.0), 0.0);
        assert_eq!(scale.to_linear(-12.0), 0.0);
        assert_eq!(scale.to_linear(f64::NAN), 0.0);
    }

    #[test]
    fn test_from_linear_endpoints() {
        let scale = LogScale::growth_profile();
        assert_close(scale.from_linear(0.0), 6.0);
        assert_close(scale.from_linear(1.0), 250.0);
    }

    #[test]
    fn test_log_scale_rejects_bad_ranges() {
        let ranges = [
            (0.0, 10.0),
            (-1.0, 10.0),
            (10.0, 10.0),
            (20.0, 10.0),
            (1.0, f64::INFINITY),
            (f64::NAN, 2.0),
        ];
        for (min, max) in ranges {
            assert!(
                matches!(LogScale::new(min, max), Err(ScaleError::InvalidRange { .. })),
                "[{min}, {max}] was accepted"
            );
        }
    }

    #[test]
    fn test_monetary_premium_scale() {
        let scale = LinearScale::monetary_premium();
        assert_eq!(scale.ratio(1.0), 0.0);
        assert_eq!(scale.ratio(20.0), 1.0);
        assert_eq!(scale.value_at(1.0), 20.0);
        assert_eq!(scale.value_at(-0.5), 1.0);

        assert!((scale.snap(1.234) - 1.23).abs() < 1e-12);
        assert!((scale.snap(7.0) - 7.0).abs() < 1e-12);
        assert_eq!(scale.snap(0.2), 1.0);
        assert_eq!(scale.snap(99.0), 20.0);
        assert_eq!(scale.snap(f64::NAN), 1.0);
    }

    #[test]
    fn test_linear_scale_rejects_bad_step() {
        assert_eq!(
            LinearScale::new(1.0, 2.0, 0.0),
            Err(ScaleError::InvalidStep(0.0))
        );
        assert!(LinearScale::new(2.0, 1.0, 0.1).is_err());
    }

    proptest! {
        #[test]
        fn prop_log_scale_round_trip(value in 6.0f64..=250.0) {
            let scale = LogScale::growth_profile();
            let back = scale.from_linear(scale.to_linear(value));
            prop_assert!(((back - value) / value).abs() < 1e-9);
        }

        #[test]
        fn prop_to_linear_stays_in_unit_range(value in proptest::num::f64::ANY) {
            let position = LogScale::growth_profile().to_linear(value);
            prop_assert!((0.0..=1.0).contains(&position));
        }

        #[test]
        fn prop_custom_range_round_trip(min in 0.001f64..100.0, span in 1.001f64..1_000.0, t in 0.0f64..=1.0) {
            let scale = LogScale::new(min, min * span).unwrap();
            let value = scale.from_linear(t);
            let back = scale.from_linear(scale.to_linear(value));
            prop_assert!(((back - value) / value).abs() < 1e-9);
        }
    }
}
