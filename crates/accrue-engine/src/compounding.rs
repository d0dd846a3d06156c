//! Periodic compounding arithmetic.
//!
//! All functions are pure `f64` arithmetic and never fail. Non-finite inputs
//! propagate to non-finite outputs; callers validate rates beforehand (see
//! [`crate::CompoundingConfig`]).
//!
//! # Example
//!
//! ```rust
//! use accrue_core::CompoundingFrequency;
//! use accrue_engine::compounding::{effective_annual_rate, growth_factor};
//!
//! let ear = effective_annual_rate(0.10, CompoundingFrequency::Monthly);
//! assert!((ear - 0.104713).abs() < 1e-6);
//!
//! // One year of monthly compounding grows by exactly the effective rate.
//! let factor = growth_factor(0.10, CompoundingFrequency::Monthly, 1.0);
//! assert!((factor - (1.0 + ear)).abs() < 1e-12);
//! ```

use accrue_core::CompoundingFrequency;

/// Rate applied per compounding period: `r / n`.
#[must_use]
pub fn periodic_rate(annual_rate: f64, frequency: CompoundingFrequency) -> f64 {
    annual_rate / f64::from(frequency.compounds_per_year())
}

/// Number of compounding periods in `years`: `n * t`.
///
/// Fractional and negative values are kept as is.
#[must_use]
pub fn compound_periods(frequency: CompoundingFrequency, years: f64) -> f64 {
    f64::from(frequency.compounds_per_year()) * years
}

/// Growth factor `(1 + r/n)^(n*t)` with a real exponent.
///
/// A negative `years` discounts backward in time.
#[must_use]
pub fn growth_factor(annual_rate: f64, frequency: CompoundingFrequency, years: f64) -> f64 {
    (1.0 + periodic_rate(annual_rate, frequency)).powf(compound_periods(frequency, years))
}

/// Effective annual rate `(1 + r/n)^n - 1`.
#[must_use]
pub fn effective_annual_rate(annual_rate: f64, frequency: CompoundingFrequency) -> f64 {
    (1.0 + periodic_rate(annual_rate, frequency)).powf(f64::from(frequency.compounds_per_year()))
        - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_effective_annual_rate_at_ten_percent() {
        assert_relative_eq!(
            effective_annual_rate(0.10, CompoundingFrequency::Yearly),
            0.10,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            effective_annual_rate(0.10, CompoundingFrequency::Monthly),
            0.104_713_067_441_296_8,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            effective_annual_rate(0.10, CompoundingFrequency::Weekly),
            0.105_064_792_779_766_1,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            effective_annual_rate(0.10, CompoundingFrequency::Daily),
            0.105_155_781_616_232_5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_effective_rate_ordering() {
        let rates: Vec<f64> = CompoundingFrequency::all()
            .iter()
            .map(|f| effective_annual_rate(0.10, *f))
            .collect();
        for pair in rates.windows(2) {
            assert!(pair[0] < pair[1], "{:?}", rates);
        }
    }

    #[test]
    fn test_zero_rate_is_identity() {
        for freq in CompoundingFrequency::all() {
            assert_eq!(growth_factor(0.0, *freq, 3.7), 1.0);
            assert_eq!(growth_factor(0.0, *freq, -2.0), 1.0);
            assert_eq!(effective_annual_rate(0.0, *freq), 0.0);
        }
    }

    #[test]
    fn test_yearly_is_annual_compounding() {
        assert_relative_eq!(
            growth_factor(0.05, CompoundingFrequency::Yearly, 2.0),
            1.1025,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_fractional_periods_not_rounded() {
        let half = growth_factor(0.12, CompoundingFrequency::Monthly, 0.5 / 12.0);
        assert_relative_eq!(half, 1.01_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_negative_time_discounts() {
        let forward = growth_factor(0.08, CompoundingFrequency::Weekly, 1.5);
        let backward = growth_factor(0.08, CompoundingFrequency::Weekly, -1.5);
        assert!(backward < 1.0);
        assert_relative_eq!(forward * backward, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_daily_approaches_continuous() {
        let daily = growth_factor(0.10, CompoundingFrequency::Daily, 1.0);
        assert_relative_eq!(daily, 0.10_f64.exp(), max_relative = 1e-3);
        assert!(daily < 0.10_f64.exp());
    }

    #[test]
    fn test_negative_rate() {
        let ear = effective_annual_rate(-0.02, CompoundingFrequency::Monthly);
        assert!(ear < 0.0 && ear > -0.02);
        assert!(growth_factor(-0.02, CompoundingFrequency::Monthly, 1.0) < 1.0);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(growth_factor(f64::NAN, CompoundingFrequency::Daily, 1.0).is_nan());
        assert!(!effective_annual_rate(f64::INFINITY, CompoundingFrequency::Yearly).is_finite());
    }
}
