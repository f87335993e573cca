//! Quote input value object

use crate::error::ValidationError;
use crate::quote::catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Smallest accepted keyword count
pub const MIN_KEYWORDS: u32 = 1;
/// Largest accepted keyword count (the setup tiers clamp earlier, at 30)
pub const MAX_KEYWORDS: u32 = 50;
/// Largest accepted daily alert count
pub const MAX_DAILY_ALERTS: u32 = 10;
/// Largest accepted count of additional manual hours
pub const MAX_EXTRA_HOURS: u32 = 20;

/// The full set of user-supplied quote parameters (Value Object)
///
/// Immutable once built; every computation is a single evaluation pass
/// over one of these. Region and country are display-only labels carried
/// through to the export record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteInput {
    /// Must be a key of the configured rate table
    pub service_type: String,
    pub keyword_count: u32,
    /// Distinct platform names from [`catalog::PLATFORMS`]
    pub platforms: BTreeSet<String>,
    /// Distinct language names from [`catalog::LANGUAGES`]; only priced
    /// for online-media services
    pub languages: BTreeSet<String>,
    pub daily_alerts: u32,
    pub extra_hours: u32,
    pub duration_months: u32,
    pub region: Option<String>,
    pub country: Option<String>,
    /// Base-to-local currency multiplier; 1.0 means no conversion
    pub conversion_rate: f64,
}

impl QuoteInput {
    /// Create an input with the required parameters; everything else
    /// defaults to empty/zero and a conversion rate of 1.0
    pub fn new(service_type: impl Into<String>, keyword_count: u32, duration_months: u32) -> Self {
        Self {
            service_type: service_type.into(),
            keyword_count,
            platforms: BTreeSet::new(),
            languages: BTreeSet::new(),
            daily_alerts: 0,
            extra_hours: 0,
            duration_months,
            region: None,
            country: None,
            conversion_rate: 1.0,
        }
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_daily_alerts(mut self, daily_alerts: u32) -> Self {
        self.daily_alerts = daily_alerts;
        self
    }

    pub fn with_extra_hours(mut self, extra_hours: u32) -> Self {
        self.extra_hours = extra_hours;
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_conversion_rate(mut self, conversion_rate: f64) -> Self {
        self.conversion_rate = conversion_rate;
        self
    }

    /// Check every numeric range and option membership
    ///
    /// Region and country are free-form and not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.keyword_count < MIN_KEYWORDS || self.keyword_count > MAX_KEYWORDS {
            return Err(ValidationError::KeywordCountOutOfRange {
                min: MIN_KEYWORDS,
                max: MAX_KEYWORDS,
                got: self.keyword_count,
            });
        }
        if self.daily_alerts > MAX_DAILY_ALERTS {
            return Err(ValidationError::TooManyDailyAlerts {
                max: MAX_DAILY_ALERTS,
                got: self.daily_alerts,
            });
        }
        if self.extra_hours > MAX_EXTRA_HOURS {
            return Err(ValidationError::TooManyExtraHours {
                max: MAX_EXTRA_HOURS,
                got: self.extra_hours,
            });
        }
        if self.duration_months == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if !self.conversion_rate.is_finite() || self.conversion_rate <= 0.0 {
            return Err(ValidationError::InvalidConversionRate(self.conversion_rate));
        }

        for platform in &self.platforms {
            if catalog::find_platform(platform).is_none() {
                return Err(ValidationError::UnknownPlatform(platform.clone()));
            }
        }
        for language in &self.languages {
            if catalog::find_language(language).is_none() {
                return Err(ValidationError::UnknownLanguage(language.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> QuoteInput {
        QuoteInput::new("Social Monitoring", 15, 3)
            .with_platforms(["Facebook", "Instagram"])
            .with_daily_alerts(3)
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let input = QuoteInput::new("Analysis", 10, 6);
        assert_eq!(input.conversion_rate, 1.0);
        assert_eq!(input.daily_alerts, 0);
        assert!(input.platforms.is_empty());
        assert!(input.region.is_none());
    }

    #[test]
    fn test_keyword_bounds() {
        let mut input = valid_input();
        input.keyword_count = 0;
        assert!(matches!(
            input.validate(),
            Err(ValidationError::KeywordCountOutOfRange { .. })
        ));

        input.keyword_count = 51;
        assert!(matches!(
            input.validate(),
            Err(ValidationError::KeywordCountOutOfRange { .. })
        ));

        input.keyword_count = 50;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_alert_and_extra_hour_bounds() {
        let mut input = valid_input();
        input.daily_alerts = 11;
        assert!(matches!(
            input.validate(),
            Err(ValidationError::TooManyDailyAlerts { .. })
        ));

        let mut input = valid_input();
        input.extra_hours = 21;
        assert!(matches!(
            input.validate(),
            Err(ValidationError::TooManyExtraHours { .. })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut input = valid_input();
        input.duration_months = 0;
        assert!(matches!(input.validate(), Err(ValidationError::ZeroDuration)));
    }

    #[test]
    fn test_conversion_rate_must_be_positive() {
        let mut input = valid_input();
        input.conversion_rate = 0.0;
        assert!(matches!(
            input.validate(),
            Err(ValidationError::InvalidConversionRate(_))
        ));
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let input = valid_input().with_platforms(["Facebook", "MySpace"]);
        assert!(matches!(
            input.validate(),
            Err(ValidationError::UnknownPlatform(_))
        ));
    }

    #[test]
    fn test_duplicate_platforms_collapse() {
        let input = valid_input().with_platforms(["Facebook", "Facebook"]);
        assert_eq!(input.platforms.len(), 1);
    }
}
