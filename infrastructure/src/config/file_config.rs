//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use presscost_domain::{ConfigurationError, OutputFormat, PricingConfig};
use serde::{Deserialize, Serialize};

/// Top-level configuration file structure
///
/// Every section is optional in the file; missing sections take the
/// built-in defaults (the published rate tables and factors).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Rate tables, setup tiers, and hour factors (uses domain types)
    pub pricing: PricingConfig,
    /// Console output settings
    pub output: FileOutputConfig,
    /// Interactive form settings
    pub form: FileFormConfig,
    /// Export settings
    pub export: FileExportConfig,
}

impl FileConfig {
    /// Validate the pricing section and hand it out for injection
    pub fn pricing_config(&self) -> Result<PricingConfig, ConfigurationError> {
        self.pricing.validate()?;
        Ok(self.pricing.clone())
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw interactive-form configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormConfig {
    /// Show the welcome banner
    pub show_banner: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Conversion rate offered as the default answer
    pub conversion_rate: f64,
    /// Region label offered as the default answer
    pub region: Option<String>,
    /// Country label offered as the default answer
    pub country: Option<String>,
}

impl Default for FileFormConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            history_file: None,
            conversion_rate: presscost_domain::catalog::DEFAULT_CONVERSION_RATE,
            region: None,
            country: None,
        }
    }
}

/// Raw export configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// Directory used when the form export is given no path
    pub directory: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use presscost_domain::MediaCategory;

    #[test]
    fn test_defaults_carry_published_tables() {
        let config = FileConfig::default();
        let pricing = config.pricing_config().unwrap();
        assert_eq!(pricing.rates.get("Online Media").unwrap().hourly_rate, 15.25);
        assert_eq!(pricing.setup_hourly_rate, 36.38);
        assert_eq!(config.form.conversion_rate, 3.67);
        assert!(config.output.color);
    }

    #[test]
    fn test_toml_overrides_single_rate() {
        let config: FileConfig = toml::from_str(
            r#"
            [pricing.rates."Night Desk"]
            hourly_rate = 21.5
            media = "online"
            "#,
        )
        .unwrap();

        // A whole-table override replaces the map at the serde level;
        // figment merging preserves the defaults alongside it.
        let rate = config.pricing.rates.get("Night Desk").unwrap();
        assert_eq!(rate.hourly_rate, 21.5);
        assert_eq!(rate.media, MediaCategory::Online);
    }

    #[test]
    fn test_toml_output_section() {
        let config: FileConfig = toml::from_str(
            r#"
            [output]
            format = "json"
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_invalid_pricing_rejected_on_extract() {
        let config: FileConfig = toml::from_str(
            r#"
            [pricing]
            setup_hourly_rate = 0.0
            "#,
        )
        .unwrap();

        assert!(config.pricing_config().is_err());
    }

    #[test]
    fn test_form_defaults_from_file() {
        let config: FileConfig = toml::from_str(
            r#"
            [form]
            conversion_rate = 1.0
            region = "GCC"
            country = "UAE"
            "#,
        )
        .unwrap();

        assert_eq!(config.form.conversion_rate, 1.0);
        assert_eq!(config.form.region.as_deref(), Some("GCC"));
        assert_eq!(config.form.country.as_deref(), Some("UAE"));
    }
}
