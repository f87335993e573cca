//! Domain layer for presscost
//!
//! This crate contains the pure computational core of the quote
//! calculator. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Setup cost
//!
//! A one-time cost incurred before recurring monitoring begins. Setup
//! effort is published as keyword-count tiers per media category; the
//! count is clamped to the tier cap and rounded up to the nearest tier.
//!
//! ## Monthly cost
//!
//! A recurring cost per month of active monitoring: a linear accumulation
//! of labor hours (alerts, keywords, platforms, languages, extra manual
//! hours) multiplied by the hourly rate of the selected service.
//!
//! ## Composition
//!
//! Setup plus monthly-over-duration gives the total project cost in the
//! base currency; multiplying by a conversion rate gives the local
//! currency (LCY) total.

pub mod error;
pub mod money;
pub mod output_format;
pub mod pricing;
pub mod quote;

// Re-export commonly used types
pub use error::{ConfigurationError, ValidationError};
pub use money::Money;
pub use output_format::OutputFormat;
pub use pricing::{
    compose::QuoteComposer,
    media::MediaCategory,
    monthly::{MonthlyCostCalculator, MonthlyWorkload},
    setup::SetupCostCalculator,
    tables::{
        HourFactors, PricingConfig, RateTable, ServiceRate, SetupHourTable, SetupSchedule,
        SetupTier,
    },
};
pub use quote::{
    catalog,
    input::QuoteInput,
    result::{Quote, QuoteResult},
};
