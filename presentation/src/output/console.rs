//! Console output formatter for evaluated quotes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use presscost_domain::Quote;

/// Formats evaluated quotes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete quote breakdown
    pub fn format(quote: &Quote) -> String {
        let mut output = String::new();
        let input = &quote.input;
        let result = &quote.result;

        // Header
        output.push_str(&Self::header("Quote Breakdown"));
        output.push('\n');

        // Coverage section
        output.push_str(&Self::section_header("Coverage"));
        output.push_str(&format!(
            "{} {}\n",
            "Service:".cyan().bold(),
            input.service_type
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Keywords:".cyan().bold(),
            input.keyword_count
        ));
        if !input.platforms.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Platforms:".cyan().bold(),
                input
                    .platforms
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        if !input.languages.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Languages:".cyan().bold(),
                input
                    .languages
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        output.push_str(&format!(
            "{} {}/day\n",
            "Alerts:".cyan().bold(),
            input.daily_alerts
        ));
        if input.extra_hours > 0 {
            output.push_str(&format!(
                "{} {}h/month\n",
                "Manual hours:".cyan().bold(),
                input.extra_hours
            ));
        }
        output.push_str(&format!(
            "{} {} months\n",
            "Duration:".cyan().bold(),
            input.duration_months
        ));
        if let Some(region) = &input.region {
            output.push_str(&format!("{} {}", "Region:".cyan().bold(), region));
            if let Some(country) = &input.country {
                output.push_str(&format!(" / {}", country));
            }
            output.push('\n');
        } else if let Some(country) = &input.country {
            output.push_str(&format!("{} {}\n", "Country:".cyan().bold(), country));
        }

        // Effort section
        output.push_str(&Self::section_header("Effort"));
        output.push_str(&format!(
            "{} {:.1}h one-time\n",
            "Setup:".cyan().bold(),
            quote.setup_hours
        ));
        output.push_str(&format!(
            "{} {:.1}h/month\n",
            "Monitoring:".cyan().bold(),
            quote.monthly_hours
        ));

        // Costs section
        output.push_str(&Self::section_header("Costs"));
        output.push_str(&format!(
            "{} {}\n",
            "Setup Cost (USD):".cyan().bold(),
            result.setup_cost.to_string().green().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Monthly Cost (USD):".cyan().bold(),
            result.monthly_cost.to_string().green().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            format!("Total Cost (USD, {} months):", input.duration_months)
                .cyan()
                .bold(),
            result.total_cost.to_string().green().bold()
        ));
        if (input.conversion_rate - 1.0).abs() > f64::EPSILON {
            output.push_str(&format!(
                "{} {}\n",
                format!("Total Cost (LCY @ {}):", input.conversion_rate)
                    .cyan()
                    .bold(),
                result.total_cost_local.to_string().green().bold()
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(quote: &Quote) -> String {
        serde_json::to_string_pretty(quote).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the natural-language summary (concise output)
    pub fn format_summary(quote: &Quote) -> String {
        let mut output = String::new();
        let input = &quote.input;
        let result = &quote.result;

        output.push_str(&format!(
            "You're quoting a {}-month {} package, tracking {} keywords across {} platform{} \
             with {} alert{}/day. Manual extra hours added: {}.\n\n",
            input.duration_months,
            input.service_type,
            input.keyword_count,
            input.platforms.len(),
            if input.platforms.len() == 1 { "" } else { "s" },
            input.daily_alerts,
            if input.daily_alerts == 1 { "" } else { "s" },
            input.extra_hours
        ));

        output.push_str(&format!(
            "{} {}\n",
            "Setup Cost:".bold(),
            result.setup_cost.to_string().green().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Monthly Cost:".bold(),
            result.monthly_cost.to_string().green().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            format!("Total Project Cost ({} months):", input.duration_months).bold(),
            result.total_cost.to_string().green().bold()
        ));
        if (input.conversion_rate - 1.0).abs() > f64::EPSILON {
            output.push_str(&format!(
                "{} {}\n",
                "Total in Local Currency:".bold(),
                result.total_cost_local.to_string().green().bold()
            ));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, quote: &Quote) -> String {
        Self::format(quote)
    }

    fn format_json(&self, quote: &Quote) -> String {
        Self::format_json(quote)
    }

    fn format_summary(&self, quote: &Quote) -> String {
        Self::format_summary(quote)
    }
}
