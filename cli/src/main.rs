//! CLI entrypoint for presscost
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use presscost_application::{BuildQuoteUseCase, ExportQuoteUseCase};
use presscost_domain::{OutputFormat, QuoteInput, catalog};
use presscost_infrastructure::{ConfigLoader, CsvQuoteExporter};
use presscost_presentation::{Cli, ConsoleFormatter, FormConfig, QuoteForm};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // Validate the tables once, then share them read-only
    let pricing = Arc::new(file_config.pricing_config()?);
    let exporter = Arc::new(CsvQuoteExporter::new());

    info!(
        "Starting presscost with {} configured services",
        pricing.rates.len()
    );

    // Interactive form mode
    if cli.interactive {
        let form_config = FormConfig {
            show_banner: file_config.form.show_banner,
            history_file: file_config.form.history_file.as_ref().map(PathBuf::from),
            conversion_rate: cli
                .conversion_rate
                .unwrap_or(file_config.form.conversion_rate),
            region: cli.region.clone().or_else(|| file_config.form.region.clone()),
            country: cli
                .country
                .clone()
                .or_else(|| file_config.form.country.clone()),
            export_dir: file_config.export.directory.as_ref().map(PathBuf::from),
        };

        let form = QuoteForm::new(Arc::clone(&pricing), exporter, form_config)
            .with_banner(file_config.form.show_banner && !cli.quiet);
        form.run()?;
        return Ok(());
    }

    // One-shot mode - a service type is required
    let service = match cli.service.clone() {
        Some(service) => service,
        None => bail!("Service type is required. Use --interactive for form mode."),
    };

    // Resolve option names against the published catalogs
    let platforms = resolve(&cli.platform, catalog::find_platform, "platform")?;
    let languages = resolve(&cli.language, catalog::find_language, "language")?;

    let mut input = QuoteInput::new(service, cli.keywords, cli.duration)
        .with_platforms(platforms)
        .with_languages(languages)
        .with_daily_alerts(cli.alerts)
        .with_extra_hours(cli.extra_hours)
        .with_conversion_rate(
            cli.conversion_rate
                .unwrap_or(file_config.form.conversion_rate),
        );
    if let Some(region) = cli.region.clone() {
        input = input.with_region(region);
    }
    if let Some(country) = cli.country.clone() {
        input = input.with_country(country);
    }

    // Create use case with injected tables
    let use_case = BuildQuoteUseCase::new(Arc::clone(&pricing));
    let quote = use_case.execute(input)?;

    // Output results
    let format: OutputFormat = match cli.output {
        Some(flag) => flag.into(),
        None => file_config.output.format.unwrap_or_default(),
    };
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&quote),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&quote),
        OutputFormat::Json => ConsoleFormatter::format_json(&quote),
    };
    println!("{}", output);

    if let Some(path) = &cli.export {
        let export_use_case = ExportQuoteUseCase::new(exporter);
        let written = export_use_case.execute(&quote, path)?;
        if !cli.quiet {
            println!("Exported to {}", written.display());
        }
    }

    Ok(())
}

/// Map CLI-provided names to their canonical catalog spellings
fn resolve(
    names: &[String],
    find: impl Fn(&str) -> Option<&'static str>,
    kind: &str,
) -> Result<Vec<&'static str>> {
    names
        .iter()
        .map(|name| find(name).ok_or_else(|| anyhow::anyhow!("Unknown {}: {}", kind, name)))
        .collect()
}
