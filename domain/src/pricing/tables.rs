//! Pricing tables injected at startup
//!
//! The reference rates and setup-hour tiers are modeled as immutable
//! configuration data: built once (defaults merged with the config file),
//! validated, then shared read-only with the calculators. Nothing mutates
//! them at runtime.

use crate::error::ConfigurationError;
use crate::pricing::media::MediaCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base-currency rate for one hour of setup work
pub const DEFAULT_SETUP_HOURLY_RATE: f64 = 36.38;

/// Hourly labor rate and setup media for one service type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceRate {
    /// Labor rate in base currency units per hour
    pub hourly_rate: f64,
    /// Media category used for the one-time setup lookup
    pub media: MediaCategory,
}

impl ServiceRate {
    pub fn new(hourly_rate: f64, media: MediaCategory) -> Self {
        Self { hourly_rate, media }
    }
}

/// Map from service-type name to its hourly rate definition
///
/// Fixed, process-wide constant data; not user-editable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<String, ServiceRate>);

impl RateTable {
    /// Look up a service type, rejecting unknown keys
    ///
    /// An out-of-table service type is a configuration error, never a
    /// silent zero rate.
    pub fn get(&self, service_type: &str) -> Result<&ServiceRate, ConfigurationError> {
        self.0
            .get(service_type)
            .ok_or_else(|| ConfigurationError::UnknownServiceType(service_type.to_string()))
    }

    /// All configured service-type names, in sorted order
    pub fn service_types(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over (name, rate) entries in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceRate)> {
        self.0.iter().map(|(name, rate)| (name.as_str(), rate))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ServiceRate)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, ServiceRate)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        [
            ("Social Monitoring", ServiceRate::new(14.63, MediaCategory::Print)),
            ("Analysis", ServiceRate::new(16.07, MediaCategory::Print)),
            ("Executive Report", ServiceRate::new(16.70, MediaCategory::Print)),
            ("Print Monitoring", ServiceRate::new(13.67, MediaCategory::Print)),
            ("Online Media", ServiceRate::new(15.25, MediaCategory::Online)),
        ]
        .into_iter()
        .map(|(name, rate)| (name.to_string(), rate))
        .collect()
    }
}

/// One keyword-count tier: counts up to `max_keywords` take `hours` of
/// setup work
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetupTier {
    pub max_keywords: u32,
    pub hours: f64,
}

impl SetupTier {
    pub fn new(max_keywords: u32, hours: f64) -> Self {
        Self { max_keywords, hours }
    }
}

/// Ascending tier list for one media category
///
/// Keyword counts above the last ceiling clamp to it ("tier clamp").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetupSchedule(Vec<SetupTier>);

impl SetupSchedule {
    pub fn new(tiers: Vec<SetupTier>) -> Self {
        Self(tiers)
    }

    pub fn tiers(&self) -> &[SetupTier] {
        &self.0
    }

    /// The keyword cap: counts above this clamp to the last tier
    pub fn cap(&self) -> u32 {
        self.0.last().map(|tier| tier.max_keywords).unwrap_or(0)
    }

    /// Setup hours for a keyword count: clamp to the cap, then round up
    /// to the smallest tier ceiling that covers the clamped count
    pub fn hours_for(&self, keyword_count: u32) -> f64 {
        let clamped = keyword_count.min(self.cap());
        match self.0.iter().find(|tier| clamped <= tier.max_keywords) {
            Some(tier) => tier.hours,
            // Unreachable on a validated schedule: clamped <= cap
            None => self.0.last().map(|tier| tier.hours).unwrap_or(0.0),
        }
    }
}

impl Default for SetupSchedule {
    fn default() -> Self {
        Self(vec![
            SetupTier::new(5, 1.0),
            SetupTier::new(15, 3.0),
            SetupTier::new(30, 8.0),
        ])
    }
}

/// Per media category, the published setup-hour schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetupHourTable(BTreeMap<MediaCategory, SetupSchedule>);

impl SetupHourTable {
    /// Look up the schedule for a media category
    pub fn schedule(&self, media: MediaCategory) -> Result<&SetupSchedule, ConfigurationError> {
        self.0
            .get(&media)
            .ok_or(ConfigurationError::MissingSetupSchedule(media))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MediaCategory, &SetupSchedule)> {
        self.0.iter().map(|(media, schedule)| (*media, schedule))
    }
}

impl FromIterator<(MediaCategory, SetupSchedule)> for SetupHourTable {
    fn from_iter<I: IntoIterator<Item = (MediaCategory, SetupSchedule)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Default for SetupHourTable {
    fn default() -> Self {
        [
            (MediaCategory::Print, SetupSchedule::default()),
            (MediaCategory::Online, SetupSchedule::default()),
        ]
        .into_iter()
        .collect()
    }
}

/// Monthly labor hours contributed by one unit of each demand parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourFactors {
    /// Hours per daily alert per month
    pub per_daily_alert: f64,
    /// Hours per tracked keyword per month
    pub per_keyword: f64,
    /// Hours per monitored platform per month
    pub per_platform: f64,
    /// Hours per coverage language per month
    pub per_language: f64,
}

impl Default for HourFactors {
    fn default() -> Self {
        Self {
            per_daily_alert: 0.75,
            per_keyword: 2.5,
            per_platform: 1.8,
            per_language: 1.2,
        }
    }
}

/// Process-wide pricing configuration
///
/// Passed by reference to both calculators, enabling isolated unit
/// testing with alternate tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub rates: RateTable,
    pub setup_hours: SetupHourTable,
    pub hour_factors: HourFactors,
    /// Base-currency rate for one hour of setup work
    pub setup_hourly_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rates: RateTable::default(),
            setup_hours: SetupHourTable::default(),
            hour_factors: HourFactors::default(),
            setup_hourly_rate: DEFAULT_SETUP_HOURLY_RATE,
        }
    }
}

impl PricingConfig {
    /// Check every table invariant; called once at startup
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, rate) in self.rates.iter() {
            if rate.hourly_rate <= 0.0 || !rate.hourly_rate.is_finite() {
                return Err(ConfigurationError::NonPositiveRate(name.to_string()));
            }
        }

        for (media, schedule) in self.setup_hours.iter() {
            let tiers = schedule.tiers();
            if tiers.is_empty() {
                return Err(ConfigurationError::EmptySetupSchedule(media));
            }
            for pair in tiers.windows(2) {
                if pair[1].max_keywords <= pair[0].max_keywords {
                    return Err(ConfigurationError::NonAscendingTiers(media));
                }
            }
            if let Some(tier) = tiers.iter().find(|tier| tier.hours < 0.0) {
                return Err(ConfigurationError::NegativeSetupHours {
                    media,
                    ceiling: tier.max_keywords,
                });
            }
        }

        let factors = &self.hour_factors;
        if factors.per_daily_alert < 0.0
            || factors.per_keyword < 0.0
            || factors.per_platform < 0.0
            || factors.per_language < 0.0
        {
            return Err(ConfigurationError::NegativeHourFactor);
        }

        if self.setup_hourly_rate <= 0.0 || !self.setup_hourly_rate.is_finite() {
            return Err(ConfigurationError::NonPositiveSetupRate(self.setup_hourly_rate));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_match_published_sheet() {
        let rates = RateTable::default();
        assert_eq!(rates.len(), 5);
        assert_eq!(rates.get("Social Monitoring").unwrap().hourly_rate, 14.63);
        assert_eq!(rates.get("Analysis").unwrap().hourly_rate, 16.07);
        assert_eq!(rates.get("Executive Report").unwrap().hourly_rate, 16.70);
        assert_eq!(rates.get("Print Monitoring").unwrap().hourly_rate, 13.67);
        assert_eq!(rates.get("Online Media").unwrap().hourly_rate, 15.25);
    }

    #[test]
    fn test_online_media_sets_up_against_online() {
        let rates = RateTable::default();
        assert_eq!(rates.get("Online Media").unwrap().media, MediaCategory::Online);
        assert_eq!(rates.get("Analysis").unwrap().media, MediaCategory::Print);
    }

    #[test]
    fn test_unknown_service_is_configuration_error() {
        let rates = RateTable::default();
        let error = rates.get("Podcast Monitoring").unwrap_err();
        assert!(matches!(error, ConfigurationError::UnknownServiceType(_)));
    }

    #[test]
    fn test_schedule_tier_rounding() {
        let schedule = SetupSchedule::default();
        assert_eq!(schedule.hours_for(1), 1.0);
        assert_eq!(schedule.hours_for(5), 1.0);
        assert_eq!(schedule.hours_for(6), 3.0);
        assert_eq!(schedule.hours_for(15), 3.0);
        assert_eq!(schedule.hours_for(16), 8.0);
        assert_eq!(schedule.hours_for(30), 8.0);
    }

    #[test]
    fn test_schedule_clamps_above_cap() {
        let schedule = SetupSchedule::default();
        assert_eq!(schedule.cap(), 30);
        assert_eq!(schedule.hours_for(31), schedule.hours_for(30));
        assert_eq!(schedule.hours_for(1000), schedule.hours_for(30));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_ascending_tiers() {
        let config = PricingConfig {
            setup_hours: [(
                MediaCategory::Print,
                SetupSchedule::new(vec![SetupTier::new(15, 3.0), SetupTier::new(5, 1.0)]),
            )]
            .into_iter()
            .collect(),
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::NonAscendingTiers(MediaCategory::Print))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_schedule() {
        let config = PricingConfig {
            setup_hours: [(MediaCategory::Online, SetupSchedule::new(vec![]))]
                .into_iter()
                .collect(),
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::EmptySetupSchedule(MediaCategory::Online))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_rate() {
        let config = PricingConfig {
            rates: [("Freebie".to_string(), ServiceRate::new(0.0, MediaCategory::Print))]
                .into_iter()
                .collect(),
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::NonPositiveRate(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_setup_rate() {
        let config = PricingConfig {
            setup_hourly_rate: 0.0,
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::NonPositiveSetupRate(_))
        ));
    }
}
