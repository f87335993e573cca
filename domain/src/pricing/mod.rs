//! Pricing core: constant tables and the three calculators
//!
//! The entire computational logic of the system lives here as pure
//! functions over an immutable [`tables::PricingConfig`].

pub mod compose;
pub mod media;
pub mod monthly;
pub mod setup;
pub mod tables;

pub use compose::QuoteComposer;
pub use media::MediaCategory;
pub use monthly::{MonthlyCostCalculator, MonthlyWorkload};
pub use setup::SetupCostCalculator;
pub use tables::{
    HourFactors, PricingConfig, RateTable, ServiceRate, SetupHourTable, SetupSchedule, SetupTier,
};
