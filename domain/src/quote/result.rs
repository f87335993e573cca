//! Derived quote results

use crate::money::Money;
use crate::quote::input::QuoteInput;
use serde::{Deserialize, Serialize};

/// Cost breakdown derived from one evaluation pass
///
/// Fully determined by the input and the constant tables; never
/// persisted, recomputed on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// One-time setup cost, base currency
    pub setup_cost: Money,
    /// Recurring cost per month of monitoring, base currency
    pub monthly_cost: Money,
    /// Setup plus monthly over the whole duration, base currency
    pub total_cost: Money,
    /// Total converted to the local currency (LCY)
    pub total_cost_local: Money,
}

/// A fully evaluated quote: the originating input, its cost breakdown,
/// and the effort figures behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub input: QuoteInput,
    pub result: QuoteResult,
    /// Setup hours behind `result.setup_cost`
    pub setup_hours: f64,
    /// Billable hours per month behind `result.monthly_cost`
    pub monthly_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_serializes_with_flat_costs() {
        let quote = Quote {
            input: QuoteInput::new("Social Monitoring", 15, 3),
            result: QuoteResult {
                setup_cost: Money::new(109.14),
                monthly_cost: Money::new(634.21),
                total_cost: Money::new(2011.77),
                total_cost_local: Money::new(2011.77),
            },
            setup_hours: 3.0,
            monthly_hours: 43.35,
        };

        let json = serde_json::to_string(&quote).unwrap();
        // Money is serde-transparent: plain numbers, no wrapper objects
        assert!(json.contains("\"setup_cost\":109.14"));
        assert!(json.contains("\"monthly_hours\":43.35"));
    }
}
