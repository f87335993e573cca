//! Recurring monthly cost
//!
//! Linear cost-hours accumulation over the demand parameters, then a
//! multiply by the hourly rate of the selected service.

use crate::error::ConfigurationError;
use crate::money::Money;
use crate::pricing::tables::PricingConfig;
use serde::{Deserialize, Serialize};

/// Demand parameters for one month of monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyWorkload {
    pub daily_alerts: u32,
    pub keyword_count: u32,
    pub platform_count: u32,
    /// Only non-zero for services that cover online media
    pub language_count: u32,
    /// Additional manual hours, added directly to the monthly total
    pub extra_hours: u32,
}

/// Computes the recurring monthly cost in the base currency
///
/// Monotonic non-decreasing in every workload parameter.
pub struct MonthlyCostCalculator<'a> {
    config: &'a PricingConfig,
}

impl<'a> MonthlyCostCalculator<'a> {
    pub fn new(config: &'a PricingConfig) -> Self {
        Self { config }
    }

    /// Total billable hours per month for the given workload
    ///
    /// `extra_hours` is a direct additive override, not scaled by any
    /// factor.
    pub fn billable_hours(&self, workload: &MonthlyWorkload) -> f64 {
        let factors = &self.config.hour_factors;
        let base_hours = workload.daily_alerts as f64 * factors.per_daily_alert
            + workload.keyword_count as f64 * factors.per_keyword
            + workload.platform_count as f64 * factors.per_platform
            + workload.language_count as f64 * factors.per_language;
        base_hours + workload.extra_hours as f64
    }

    /// Recurring monthly cost in the base currency
    ///
    /// An unknown service type is a configuration error, never a silent
    /// zero rate.
    pub fn compute(
        &self,
        service_type: &str,
        workload: &MonthlyWorkload,
    ) -> Result<Money, ConfigurationError> {
        let rate = self.config.rates.get(service_type)?;
        Ok(Money::new(self.billable_hours(workload) * rate.hourly_rate))
    }
}
