//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for an evaluated quote
///
/// This is a domain concept representing how the output should be
/// formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full breakdown with inputs, effort, and costs
    Full,
    /// Natural-language summary plus the three cost lines (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
