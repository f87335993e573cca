//! Build quote use case
//!
//! Orchestrates the full evaluation pass: validate the input, price the
//! one-time setup and the recurring month, compose the project total.

use presscost_domain::{
    ConfigurationError, MediaCategory, MonthlyCostCalculator, MonthlyWorkload, PricingConfig,
    Quote, QuoteComposer, QuoteInput, SetupCostCalculator, ValidationError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building a quote
///
/// Either the constant tables are missing an entry the input refers to,
/// or a numeric input is out of its declared domain. In both cases no
/// partial quote is produced.
#[derive(Error, Debug)]
pub enum BuildQuoteError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

/// Use case for evaluating one quote from its input parameters
pub struct BuildQuoteUseCase {
    pricing: Arc<PricingConfig>,
}

impl BuildQuoteUseCase {
    pub fn new(pricing: Arc<PricingConfig>) -> Self {
        Self { pricing }
    }

    /// Execute one evaluation pass
    pub fn execute(&self, input: QuoteInput) -> Result<Quote, BuildQuoteError> {
        input.validate()?;

        let service = self.pricing.rates.get(&input.service_type)?;
        let media = service.media;

        // Languages only add monthly effort for online coverage
        let language_count = match media {
            MediaCategory::Online => input.languages.len() as u32,
            MediaCategory::Print => 0,
        };

        let workload = MonthlyWorkload {
            daily_alerts: input.daily_alerts,
            keyword_count: input.keyword_count,
            platform_count: input.platforms.len() as u32,
            language_count,
            extra_hours: input.extra_hours,
        };

        let setup_calc = SetupCostCalculator::new(&self.pricing);
        let monthly_calc = MonthlyCostCalculator::new(&self.pricing);

        let setup_hours = setup_calc.setup_hours(media, input.keyword_count)?;
        let setup_cost = setup_calc.compute(media, input.keyword_count)?;
        let monthly_hours = monthly_calc.billable_hours(&workload);
        let monthly_cost = monthly_calc.compute(&input.service_type, &workload)?;

        let result = QuoteComposer::compose(
            setup_cost,
            monthly_cost,
            input.duration_months,
            input.conversion_rate,
        )?;

        debug!(
            "Priced {} on {} media: {}h setup, {}h/month",
            input.service_type, media, setup_hours, monthly_hours
        );
        info!(
            "Quote built: {} months of {} totals {}",
            input.duration_months, input.service_type, result.total_cost
        );

        Ok(Quote {
            input,
            result,
            setup_hours,
            monthly_hours,
        })
    }
}
