//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for an evaluated quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full breakdown with inputs, effort, and costs
    Full,
    /// Natural-language summary plus the three cost lines
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for presscost_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => presscost_domain::OutputFormat::Full,
            OutputFormat::Summary => presscost_domain::OutputFormat::Summary,
            OutputFormat::Json => presscost_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for presscost
#[derive(Parser, Debug)]
#[command(name = "presscost")]
#[command(author, version, about = "Quote calculator for media-monitoring services")]
#[command(long_about = r#"
Presscost prices a media-monitoring package: a one-time setup cost from
the keyword-count tier, a recurring monthly cost from the configured
labor-hour factors, and the total project cost in USD and in a converted
local currency.

Run with --interactive for the guided form, or pass the parameters as
flags for a one-shot quote.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./presscost.toml    Project-level config
3. ~/.config/presscost/config.toml   Global config

Example:
  presscost --service "Social Monitoring" --keywords 15 -p Facebook -p Instagram --alerts 3
  presscost --service "Online Media" -l Arabic -l English --duration 6 --export quote.csv
  presscost --interactive
"#)]
pub struct Cli {
    /// Service type to quote (a key of the configured rate table)
    #[arg(short, long, value_name = "SERVICE")]
    pub service: Option<String>,

    /// Start the interactive quote form
    #[arg(short, long)]
    pub interactive: bool,

    /// Number of keywords to track
    #[arg(short, long, value_name = "COUNT", default_value_t = 15)]
    pub keywords: u32,

    /// Platform to monitor (can be specified multiple times)
    #[arg(short, long, value_name = "PLATFORM")]
    pub platform: Vec<String>,

    /// Coverage language (can be specified multiple times; priced for
    /// online-media services only)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Vec<String>,

    /// Number of daily alerts
    #[arg(short, long, value_name = "COUNT", default_value_t = 3)]
    pub alerts: u32,

    /// Additional manual hours per month
    #[arg(long, value_name = "HOURS", default_value_t = 0)]
    pub extra_hours: u32,

    /// Coverage duration in months
    #[arg(short, long, value_name = "MONTHS", default_value_t = 3)]
    pub duration: u32,

    /// Region label carried into the export record
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Country label carried into the export record
    #[arg(long, value_name = "COUNTRY")]
    pub country: Option<String>,

    /// Conversion rate from USD to the local currency
    #[arg(long, value_name = "RATE")]
    pub conversion_rate: Option<f64>,

    /// Write the quote as a one-row CSV record to this path
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Output format (defaults to the configured format, else summary)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything except the quote itself
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
