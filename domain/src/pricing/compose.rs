//! Quote composition
//!
//! Combines setup cost, monthly cost, and duration into the total project
//! cost, in the base currency and in the converted local currency.

use crate::error::ValidationError;
use crate::money::Money;
use crate::quote::result::QuoteResult;

/// Combines the two cost components into a [`QuoteResult`]
pub struct QuoteComposer;

impl QuoteComposer {
    /// `total = setup + monthly * duration`, converted with `rate`
    ///
    /// The duration is not restricted to the published choices; any
    /// positive month count composes. A rate of 1.0 means no conversion.
    pub fn compose(
        setup_cost: Money,
        monthly_cost: Money,
        duration_months: u32,
        conversion_rate: f64,
    ) -> Result<QuoteResult, ValidationError> {
        if duration_months == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if !conversion_rate.is_finite() || conversion_rate <= 0.0 {
            return Err(ValidationError::InvalidConversionRate(conversion_rate));
        }

        let total_cost = setup_cost + monthly_cost * duration_months;
        Ok(QuoteResult {
            setup_cost,
            monthly_cost,
            total_cost,
            total_cost_local: total_cost.convert(conversion_rate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_accumulates_monthly_over_duration() {
        let result =
            QuoteComposer::compose(Money::new(109.14), Money::new(500.0), 3, 1.0).unwrap();
        assert!(result.total_cost.approx_eq(Money::new(109.14 + 500.0 * 3.0)));
    }

    #[test]
    fn test_conversion_identity_at_rate_one() {
        let result =
            QuoteComposer::compose(Money::new(100.0), Money::new(200.0), 6, 1.0).unwrap();
        assert_eq!(result.total_cost_local, result.total_cost);
    }

    #[test]
    fn test_local_total_scales_with_rate() {
        for rate in [0.27, 1.0, 3.67, 110.0] {
            let result =
                QuoteComposer::compose(Money::new(100.0), Money::new(200.0), 12, rate).unwrap();
            assert!(result
                .total_cost_local
                .approx_eq(result.total_cost * rate));
        }
    }

    #[test]
    fn test_total_dominates_both_components() {
        let result =
            QuoteComposer::compose(Money::new(100.0), Money::new(200.0), 1, 1.0).unwrap();
        assert!(result.total_cost >= result.setup_cost);
        assert!(result.total_cost >= result.monthly_cost);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let error =
            QuoteComposer::compose(Money::new(100.0), Money::new(200.0), 0, 1.0).unwrap_err();
        assert!(matches!(error, ValidationError::ZeroDuration));
    }

    #[test]
    fn test_bad_conversion_rates_rejected() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = QuoteComposer::compose(Money::new(1.0), Money::new(1.0), 3, rate);
            assert!(matches!(
                result,
                Err(ValidationError::InvalidConversionRate(_))
            ));
        }
    }
}
