//! One-time setup cost
//!
//! Maps a media category and a keyword count to the cost of preparing
//! coverage: tier lookup, then multiply by the fixed setup hourly rate.

use crate::error::ConfigurationError;
use crate::money::Money;
use crate::pricing::media::MediaCategory;
use crate::pricing::tables::PricingConfig;

/// Computes the one-time setup cost in the base currency
///
/// Pure: no side effects, no state beyond the borrowed tables.
pub struct SetupCostCalculator<'a> {
    config: &'a PricingConfig,
}

impl<'a> SetupCostCalculator<'a> {
    pub fn new(config: &'a PricingConfig) -> Self {
        Self { config }
    }

    /// Setup hours for a media category and keyword count
    ///
    /// The count is clamped to the schedule cap and rounded up to the
    /// nearest published tier.
    pub fn setup_hours(
        &self,
        media: MediaCategory,
        keyword_count: u32,
    ) -> Result<f64, ConfigurationError> {
        let schedule = self.config.setup_hours.schedule(media)?;
        Ok(schedule.hours_for(keyword_count))
    }

    /// One-time setup cost in the base currency
    pub fn compute(
        &self,
        media: MediaCategory,
        keyword_count: u32,
    ) -> Result<Money, ConfigurationError> {
        let hours = self.setup_hours(media, keyword_count)?;
        Ok(Money::new(hours * self.config.setup_hourly_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::tables::DEFAULT_SETUP_HOURLY_RATE;

    fn calculator_config() -> PricingConfig {
        PricingConfig::default()
    }

    #[test]
    fn test_boundary_exactness() {
        let config = calculator_config();
        let calc = SetupCostCalculator::new(&config);

        let cost = |count| calc.compute(MediaCategory::Print, count).unwrap();
        assert!(cost(5).approx_eq(Money::new(1.0 * DEFAULT_SETUP_HOURLY_RATE)));
        assert!(cost(6).approx_eq(Money::new(3.0 * DEFAULT_SETUP_HOURLY_RATE)));
        assert!(cost(15).approx_eq(Money::new(3.0 * DEFAULT_SETUP_HOURLY_RATE)));
        assert!(cost(16).approx_eq(Money::new(8.0 * DEFAULT_SETUP_HOURLY_RATE)));
    }

    #[test]
    fn test_clamp_above_cap() {
        let config = calculator_config();
        let calc = SetupCostCalculator::new(&config);

        let at_cap = calc.compute(MediaCategory::Print, 30).unwrap();
        assert_eq!(calc.compute(MediaCategory::Print, 31).unwrap(), at_cap);
        assert_eq!(calc.compute(MediaCategory::Print, 1000).unwrap(), at_cap);
    }

    #[test]
    fn test_monotonic_in_keyword_count() {
        let config = calculator_config();
        let calc = SetupCostCalculator::new(&config);

        let mut previous = Money::ZERO;
        for count in 1..=60 {
            let cost = calc.compute(MediaCategory::Online, count).unwrap();
            assert!(cost >= previous, "setup cost decreased at {} keywords", count);
            previous = cost;
        }
    }

    #[test]
    fn test_missing_schedule_is_configuration_error() {
        use crate::pricing::tables::{SetupHourTable, SetupSchedule};

        let config = PricingConfig {
            setup_hours: [(MediaCategory::Online, SetupSchedule::default())]
                .into_iter()
                .collect::<SetupHourTable>(),
            ..PricingConfig::default()
        };
        let calc = SetupCostCalculator::new(&config);

        let error = calc.compute(MediaCategory::Print, 10).unwrap_err();
        assert!(matches!(
            error,
            ConfigurationError::MissingSetupSchedule(MediaCategory::Print)
        ));
    }
}
