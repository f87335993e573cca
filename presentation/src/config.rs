//! Presentation-level configuration
//!
//! Plain settings structs the binary assembles from the config file and
//! command-line flags before wiring the form and formatters.

use presscost_domain::{OutputFormat, catalog};
use std::path::PathBuf;

/// Console output settings
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Interactive form settings
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Show the welcome banner
    pub show_banner: bool,
    /// Path to history file (defaults to the user data dir)
    pub history_file: Option<PathBuf>,
    /// Conversion rate offered as the default answer
    pub conversion_rate: f64,
    /// Region label offered as the default answer
    pub region: Option<String>,
    /// Country label offered as the default answer
    pub country: Option<String>,
    /// Directory used when an export is requested without a path
    pub export_dir: Option<PathBuf>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            history_file: None,
            conversion_rate: catalog::DEFAULT_CONVERSION_RATE,
            region: None,
            country: None,
            export_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let config = FormConfig::default();
        assert!(config.show_banner);
        assert_eq!(config.conversion_rate, 3.67);
        assert!(config.history_file.is_none());
    }
}
