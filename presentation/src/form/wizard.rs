//! Interactive quote form (guided wizard)
//!
//! Walks through every quote parameter in the terminal: numbered
//! selections for listed options, numeric prompts that re-ask until the
//! answer is in range, comma-separated multi-select for platforms and
//! languages. Languages are only asked for online-media services.

use crate::ConsoleFormatter;
use crate::config::FormConfig;
use colored::Colorize;
use presscost_application::{BuildQuoteUseCase, ExportQuoteUseCase, QuoteExporter};
use presscost_domain::quote::input::{
    MAX_DAILY_ALERTS, MAX_EXTRA_HOURS, MAX_KEYWORDS, MIN_KEYWORDS,
};
use presscost_domain::{MediaCategory, PricingConfig, Quote, QuoteInput, catalog};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// What a prompt round produced
enum FormEvent<T> {
    /// A validated answer
    Value(T),
    /// ^C: abandon the quote being assembled, back to the top
    Cancel,
    /// /quit or EOF: leave the form
    Quit,
}

/// Propagate Cancel/Quit out of `collect_input`, unwrap answers
macro_rules! ask {
    ($expr:expr) => {
        match $expr? {
            FormEvent::Value(value) => value,
            FormEvent::Cancel => return Ok(FormEvent::Cancel),
            FormEvent::Quit => return Ok(FormEvent::Quit),
        }
    };
}

/// Interactive quote form
pub struct QuoteForm<E: QuoteExporter + 'static> {
    build: BuildQuoteUseCase,
    export: ExportQuoteUseCase<E>,
    pricing: Arc<PricingConfig>,
    config: FormConfig,
}

impl<E: QuoteExporter + 'static> QuoteForm<E> {
    /// Create a new form over the given pricing tables and exporter
    pub fn new(pricing: Arc<PricingConfig>, exporter: Arc<E>, config: FormConfig) -> Self {
        Self {
            build: BuildQuoteUseCase::new(Arc::clone(&pricing)),
            export: ExportQuoteUseCase::new(exporter),
            pricing,
            config,
        }
    }

    /// Set whether to show the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.config.show_banner = show;
        self
    }

    /// Run the interactive form until the user quits
    pub fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.history_path();

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.config.show_banner {
            self.print_welcome();
        }

        loop {
            match self.collect_input(&mut rl)? {
                FormEvent::Quit => {
                    println!("Bye!");
                    break;
                }
                FormEvent::Cancel => {
                    println!();
                    println!("Quote cancelled.");
                    continue;
                }
                FormEvent::Value(input) => match self.build.execute(input) {
                    Ok(quote) => {
                        println!();
                        println!("{}", ConsoleFormatter::format(&quote));

                        if matches!(self.offer_export(&mut rl, &quote)?, FormEvent::Quit) {
                            println!("Bye!");
                            break;
                        }
                        if matches!(self.ask_continue(&mut rl)?, FormEvent::Quit) {
                            println!("Bye!");
                            break;
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                    }
                },
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn history_path(&self) -> Option<PathBuf> {
        self.config.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("presscost").join("history.txt"))
        })
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Presscost - Quote Form             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        self.print_rates();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /rates    - Show the configured hourly rates");
        println!("  /quit     - Exit the form");
        println!();
        println!("Press Enter to accept the value shown in [brackets]; ^C cancels");
        println!("the quote being assembled.");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /rates           - Show the configured hourly rates");
        println!("  /quit, /exit, /q - Exit the form");
        println!();
        println!("Answer prompts with the number of an option or its name.");
        println!("Multi-select prompts take comma-separated answers (e.g. 1,3).");
        println!();
    }

    fn print_rates(&self) {
        println!("Configured services:");
        for (name, rate) in self.pricing.rates.iter() {
            println!(
                "  - {} ({}/h, {} media)",
                name.bold(),
                rate.hourly_rate,
                rate.media
            );
        }
        println!();
    }

    /// Walk through every parameter and assemble a [`QuoteInput`]
    fn collect_input(&self, rl: &mut DefaultEditor) -> RlResult<FormEvent<QuoteInput>> {
        let services: Vec<&str> = self.pricing.rates.service_types().collect();

        let service = ask!(self.prompt_choice(rl, "Service type", &services, None));
        let media = self
            .pricing
            .rates
            .get(&service)
            .map(|rate| rate.media)
            .unwrap_or(MediaCategory::Print);

        let keywords = ask!(self.prompt_u32(
            rl,
            "Keywords to track",
            MIN_KEYWORDS,
            MAX_KEYWORDS,
            15
        ));
        let platforms = ask!(self.prompt_multi(rl, "Platforms to monitor", catalog::PLATFORMS));

        let languages = if media == MediaCategory::Online {
            ask!(self.prompt_multi(rl, "Coverage languages", catalog::LANGUAGES))
        } else {
            Vec::new()
        };

        let alerts = ask!(self.prompt_u32(rl, "Daily alerts", 0, MAX_DAILY_ALERTS, 3));
        let extra_hours = ask!(self.prompt_u32(
            rl,
            "Additional manual hours per month",
            0,
            MAX_EXTRA_HOURS,
            0
        ));

        let durations: Vec<String> = catalog::DURATIONS_MONTHS
            .iter()
            .map(|months| months.to_string())
            .collect();
        let duration_labels: Vec<&str> = durations.iter().map(String::as_str).collect();
        let duration_answer = ask!(self.prompt_choice(
            rl,
            "Coverage duration (months)",
            &duration_labels,
            Some(duration_labels[0])
        ));
        let duration: u32 = duration_answer.parse().unwrap_or(catalog::DURATIONS_MONTHS[0]);

        let region = ask!(self.prompt_optional_choice(
            rl,
            "Region",
            catalog::REGIONS,
            self.config.region.as_deref()
        ));
        let country = ask!(self.prompt_optional_choice(
            rl,
            "Country",
            catalog::COUNTRIES,
            self.config.country.as_deref()
        ));

        let conversion_rate = ask!(self.prompt_rate(
            rl,
            "Conversion rate to local currency",
            self.config.conversion_rate
        ));

        let mut input = QuoteInput::new(service, keywords, duration)
            .with_platforms(platforms)
            .with_languages(languages)
            .with_daily_alerts(alerts)
            .with_extra_hours(extra_hours)
            .with_conversion_rate(conversion_rate);
        if let Some(region) = region {
            input = input.with_region(region);
        }
        if let Some(country) = country {
            input = input.with_country(country);
        }

        Ok(FormEvent::Value(input))
    }

    /// Read one line, handling commands, ^C, and EOF
    fn read_answer(&self, rl: &mut DefaultEditor, prompt: &str) -> RlResult<FormEvent<String>> {
        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    match line.as_str() {
                        "/quit" | "/exit" | "/q" => return Ok(FormEvent::Quit),
                        "/help" | "/h" | "/?" => {
                            self.print_help();
                            continue;
                        }
                        "/rates" => {
                            self.print_rates();
                            continue;
                        }
                        _ => {}
                    }
                    if !line.is_empty() {
                        let _ = rl.add_history_entry(&line);
                    }
                    return Ok(FormEvent::Value(line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    return Ok(FormEvent::Cancel);
                }
                Err(ReadlineError::Eof) => return Ok(FormEvent::Quit),
                Err(err) => return Err(err),
            }
        }
    }

    /// Pick exactly one option from a numbered list
    fn prompt_choice(
        &self,
        rl: &mut DefaultEditor,
        label: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> RlResult<FormEvent<String>> {
        println!();
        println!("{}", label.cyan().bold());
        for (index, option) in options.iter().enumerate() {
            println!("  {}. {}", index + 1, option);
        }
        let prompt = match default {
            Some(default) => format!("Select [{}]: ", default),
            None => "Select: ".to_string(),
        };

        loop {
            match self.read_answer(rl, &prompt)? {
                FormEvent::Value(line) => {
                    if line.is_empty()
                        && let Some(default) = default
                    {
                        return Ok(FormEvent::Value(default.to_string()));
                    }
                    match parse_one(options, &line) {
                        Some(option) => return Ok(FormEvent::Value(option.to_string())),
                        None => println!(
                            "Enter a number between 1 and {}, or an option name",
                            options.len()
                        ),
                    }
                }
                FormEvent::Cancel => return Ok(FormEvent::Cancel),
                FormEvent::Quit => return Ok(FormEvent::Quit),
            }
        }
    }

    /// Pick zero-or-one option; Enter skips (or accepts the default)
    fn prompt_optional_choice(
        &self,
        rl: &mut DefaultEditor,
        label: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> RlResult<FormEvent<Option<String>>> {
        println!();
        println!("{}", label.cyan().bold());
        for (index, option) in options.iter().enumerate() {
            println!("  {}. {}", index + 1, option);
        }
        let prompt = match default {
            Some(default) => format!("Select [{}]: ", default),
            None => "Select (Enter to skip): ".to_string(),
        };

        loop {
            match self.read_answer(rl, &prompt)? {
                FormEvent::Value(line) => {
                    if line.is_empty() {
                        return Ok(FormEvent::Value(default.map(str::to_string)));
                    }
                    match parse_one(options, &line) {
                        Some(option) => return Ok(FormEvent::Value(Some(option.to_string()))),
                        None => println!(
                            "Enter a number between 1 and {}, an option name, or nothing to skip",
                            options.len()
                        ),
                    }
                }
                FormEvent::Cancel => return Ok(FormEvent::Cancel),
                FormEvent::Quit => return Ok(FormEvent::Quit),
            }
        }
    }

    /// Pick any number of options, comma-separated; Enter selects none
    fn prompt_multi(
        &self,
        rl: &mut DefaultEditor,
        label: &str,
        options: &[&str],
    ) -> RlResult<FormEvent<Vec<String>>> {
        println!();
        println!("{}", label.cyan().bold());
        for (index, option) in options.iter().enumerate() {
            println!("  {}. {}", index + 1, option);
        }

        loop {
            match self.read_answer(rl, "Select (comma-separated, Enter for none): ")? {
                FormEvent::Value(line) => match parse_selection(options, &line) {
                    Ok(selected) => return Ok(FormEvent::Value(selected)),
                    Err(message) => println!("{}", message),
                },
                FormEvent::Cancel => return Ok(FormEvent::Cancel),
                FormEvent::Quit => return Ok(FormEvent::Quit),
            }
        }
    }

    /// Read an integer within a range; Enter accepts the default
    fn prompt_u32(
        &self,
        rl: &mut DefaultEditor,
        label: &str,
        min: u32,
        max: u32,
        default: u32,
    ) -> RlResult<FormEvent<u32>> {
        let prompt = format!("{} ({}-{}) [{}]: ", label, min, max, default);

        loop {
            match self.read_answer(rl, &prompt)? {
                FormEvent::Value(line) => {
                    if line.is_empty() {
                        return Ok(FormEvent::Value(default));
                    }
                    match line.parse::<u32>() {
                        Ok(value) if value >= min && value <= max => {
                            return Ok(FormEvent::Value(value));
                        }
                        _ => println!("Enter a number between {} and {}", min, max),
                    }
                }
                FormEvent::Cancel => return Ok(FormEvent::Cancel),
                FormEvent::Quit => return Ok(FormEvent::Quit),
            }
        }
    }

    /// Read a positive conversion rate; Enter accepts the default
    fn prompt_rate(
        &self,
        rl: &mut DefaultEditor,
        label: &str,
        default: f64,
    ) -> RlResult<FormEvent<f64>> {
        let prompt = format!("{} [{}]: ", label, default);

        loop {
            match self.read_answer(rl, &prompt)? {
                FormEvent::Value(line) => {
                    if line.is_empty() {
                        return Ok(FormEvent::Value(default));
                    }
                    match line.parse::<f64>() {
                        Ok(rate) if rate.is_finite() && rate > 0.0 => {
                            return Ok(FormEvent::Value(rate));
                        }
                        _ => println!("Enter a positive number (1.0 means no conversion)"),
                    }
                }
                FormEvent::Cancel => return Ok(FormEvent::Cancel),
                FormEvent::Quit => return Ok(FormEvent::Quit),
            }
        }
    }

    /// Offer the one-shot CSV export after a quote is shown
    fn offer_export(&self, rl: &mut DefaultEditor, quote: &Quote) -> RlResult<FormEvent<()>> {
        let prompt = match &self.config.export_dir {
            Some(dir) => format!("Export as CSV [{}] (or a path, '-' to skip): ", dir.display()),
            None => "Export as CSV? Enter a path (Enter to skip): ".to_string(),
        };

        match self.read_answer(rl, &prompt)? {
            FormEvent::Value(line) => {
                let destination = match (line.as_str(), &self.config.export_dir) {
                    ("-", _) | ("", None) => return Ok(FormEvent::Value(())),
                    ("", Some(dir)) => dir.clone(),
                    (path, _) => PathBuf::from(path),
                };
                match self.export.execute(quote, &destination) {
                    Ok(written) => println!("Saved {}", written.display()),
                    Err(e) => eprintln!("Error: {}", e),
                }
                Ok(FormEvent::Value(()))
            }
            FormEvent::Cancel => Ok(FormEvent::Value(())),
            FormEvent::Quit => Ok(FormEvent::Quit),
        }
    }

    fn ask_continue(&self, rl: &mut DefaultEditor) -> RlResult<FormEvent<()>> {
        println!();
        match self.read_answer(rl, "Press Enter for another quote, or /quit to exit: ")? {
            FormEvent::Value(_) | FormEvent::Cancel => Ok(FormEvent::Value(())),
            FormEvent::Quit => Ok(FormEvent::Quit),
        }
    }
}

/// Resolve a single answer against an option list: a case-insensitive
/// name, or a 1-based number
///
/// Names win over index interpretation so that numeric option labels
/// (the duration months) mean themselves, not a list position.
fn parse_one<'a>(options: &[&'a str], line: &str) -> Option<&'a str> {
    let line = line.trim();
    if let Some(option) = options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(line))
        .copied()
    {
        return Some(option);
    }
    line.parse::<usize>()
        .ok()
        .and_then(|index| (index >= 1 && index <= options.len()).then(|| options[index - 1]))
}

/// Parse a comma-separated multi-select answer against an option list
///
/// Accepts 1-based numbers and case-insensitive names; returns the
/// canonical spellings, deduplicated, in answer order.
fn parse_selection(options: &[&str], line: &str) -> Result<Vec<String>, String> {
    let mut selected: Vec<String> = Vec::new();
    for token in line.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match parse_one(options, token) {
            Some(option) => {
                if !selected.iter().any(|existing| existing == option) {
                    selected.push(option.to_string());
                }
            }
            None => return Err(format!("Unknown option: {}", token)),
        }
    }
    Ok(selected)
}
