//! Domain error types
//!
//! A computation either fails here or produces a complete quote; there is
//! no partial-result mode.

use crate::pricing::media::MediaCategory;
use thiserror::Error;

/// An input key has no entry in the corresponding constant table, or a
/// table violates its own shape invariants.
///
/// Not recoverable at the call site: the computation is rejected and no
/// quote is shown.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("no hourly rate configured for service type \"{0}\"")]
    UnknownServiceType(String),

    #[error("no setup schedule configured for {0} media")]
    MissingSetupSchedule(MediaCategory),

    #[error("setup schedule for {0} media has no tiers")]
    EmptySetupSchedule(MediaCategory),

    #[error("setup tiers for {0} media must have strictly ascending keyword ceilings")]
    NonAscendingTiers(MediaCategory),

    #[error("setup hours for {media} media, tier {ceiling}, cannot be negative")]
    NegativeSetupHours { media: MediaCategory, ceiling: u32 },

    #[error("hourly rate for service type \"{0}\" must be positive")]
    NonPositiveRate(String),

    #[error("setup hourly rate must be positive, got {0}")]
    NonPositiveSetupRate(f64),

    #[error("hour factors cannot be negative")]
    NegativeHourFactor,
}

/// A numeric input violates its declared domain
///
/// The form layer re-prompts on these; the one-shot CLI surfaces them and
/// exits.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("keyword count must be between {min} and {max}, got {got}")]
    KeywordCountOutOfRange { min: u32, max: u32, got: u32 },

    #[error("daily alert count cannot exceed {max}, got {got}")]
    TooManyDailyAlerts { max: u32, got: u32 },

    #[error("extra manual hours cannot exceed {max}, got {got}")]
    TooManyExtraHours { max: u32, got: u32 },

    #[error("coverage duration must be at least one month")]
    ZeroDuration,

    #[error("conversion rate must be a positive number, got {0}")]
    InvalidConversionRate(f64),

    #[error("unrecognized platform \"{0}\"")]
    UnknownPlatform(String),

    #[error("unrecognized language \"{0}\"")]
    UnknownLanguage(String),
}
