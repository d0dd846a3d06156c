//! Calculation parameters for one evaluation.

use accrue_core::{CompoundingFrequency, Date};
use serde::{Deserialize, Serialize};

use crate::compounding;
use crate::error::{Validate, ValidationError};

/// Annual rate, in percent, offered when the user has not chosen one.
pub const DEFAULT_RATE_PERCENT: f64 = 11.0;

/// Balance date, nominal annual rate and compounding frequency.
///
/// `annual_rate` is a fraction (`0.11` for 11%). Zero and negative rates are
/// accepted; see [`Validate`] for what is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundingConfig {
    /// Date as of which every entry is valued.
    pub balance_date: Date,
    /// Nominal annual rate as a fraction.
    pub annual_rate: f64,
    /// Compounding frequency.
    pub frequency: CompoundingFrequency,
}

impl CompoundingConfig {
    /// Creates a config from a fractional annual rate.
    #[must_use]
    pub fn new(balance_date: Date, annual_rate: f64, frequency: CompoundingFrequency) -> Self {
        Self {
            balance_date,
            annual_rate,
            frequency,
        }
    }

    /// Creates a config from a rate given in percent (`11.0` for 11%).
    #[must_use]
    pub fn from_percent(
        balance_date: Date,
        rate_percent: f64,
        frequency: CompoundingFrequency,
    ) -> Self {
        Self::new(balance_date, rate_percent / 100.0, frequency)
    }

    /// Default rate and frequency for the given balance date.
    #[must_use]
    pub fn with_defaults(balance_date: Date) -> Self {
        Self::from_percent(balance_date, DEFAULT_RATE_PERCENT, CompoundingFrequency::default())
    }

    /// Returns a copy with a different balance date.
    #[must_use]
    pub fn with_balance_date(mut self, balance_date: Date) -> Self {
        self.balance_date = balance_date;
        self
    }

    /// Returns a copy with a different frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: CompoundingFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Annual rate in percent.
    #[must_use]
    pub fn rate_percent(&self) -> f64 {
        self.annual_rate * 100.0
    }

    /// Compounding periods per year for the configured frequency.
    #[must_use]
    pub fn compounds_per_year(&self) -> u32 {
        self.frequency.compounds_per_year()
    }

    /// Rate applied per compounding period.
    #[must_use]
    pub fn periodic_rate(&self) -> f64 {
        compounding::periodic_rate(self.annual_rate, self.frequency)
    }

    /// Effective annual rate for the configured rate and frequency.
    #[must_use]
    pub fn effective_annual_rate(&self) -> f64 {
        compounding::effective_annual_rate(self.annual_rate, self.frequency)
    }
}

impl Validate for CompoundingConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.annual_rate.is_finite() {
            errors.push(ValidationError::new("rate", "Interest rate must be a finite number"));
        } else if 1.0 + self.periodic_rate() <= 0.0 {
            errors.push(ValidationError::new(
                "rate",
                format!(
                    "Interest rate of {}% wipes out the principal every {} period",
                    self.rate_percent(),
                    self.frequency.to_string().to_lowercase()
                ),
            ));
        }

        errors
    }
}
