//! Output formatter trait

use presscost_domain::Quote;

/// Trait for formatting evaluated quotes
pub trait OutputFormatter {
    /// Format the complete quote breakdown
    fn format(&self, quote: &Quote) -> String;

    /// Format as JSON
    fn format_json(&self, quote: &Quote) -> String;

    /// Format the natural-language summary (concise output)
    fn format_summary(&self, quote: &Quote) -> String;
}
