//! CSV file writer for evaluated quotes.
//!
//! One header row plus one record per export: the originating input
//! fields followed by the four cost figures, comma-separated, written
//! via a buffered writer.

use presscost_application::{ExportError, QuoteExporter};
use presscost_domain::Quote;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column order of the exported record
pub const CSV_HEADER: &[&str] = &[
    "Region",
    "Country",
    "Service Type",
    "Project Duration (months)",
    "Conversion Rate",
    "Setup Cost (USD)",
    "Monthly Cost (USD)",
    "Total Cost (USD)",
    "Total Cost (LCY)",
];

/// Quote exporter that writes one flat CSV record
#[derive(Debug, Default)]
pub struct CsvQuoteExporter;

impl CsvQuoteExporter {
    pub fn new() -> Self {
        Self
    }

    /// File name used when the destination is a directory
    pub fn default_file_name() -> String {
        format!("quote-{}.csv", chrono::Local::now().format("%Y%m%d"))
    }

    /// Quote a field per RFC 4180 when it contains a separator or quote
    fn field(raw: &str) -> String {
        if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
            format!("\"{}\"", raw.replace('"', "\"\""))
        } else {
            raw.to_string()
        }
    }

    fn record(quote: &Quote) -> Vec<String> {
        let input = &quote.input;
        let result = &quote.result;
        vec![
            input.region.clone().unwrap_or_default(),
            input.country.clone().unwrap_or_default(),
            input.service_type.clone(),
            input.duration_months.to_string(),
            input.conversion_rate.to_string(),
            format!("{:.2}", result.setup_cost.amount()),
            format!("{:.2}", result.monthly_cost.amount()),
            format!("{:.2}", result.total_cost.amount()),
            format!("{:.2}", result.total_cost_local.amount()),
        ]
    }

    fn line(fields: impl IntoIterator<Item = String>) -> String {
        fields
            .into_iter()
            .map(|field| Self::field(&field))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl QuoteExporter for CsvQuoteExporter {
    fn export(&self, quote: &Quote, destination: &Path) -> Result<PathBuf, ExportError> {
        let path = if destination.is_dir() {
            destination.join(Self::default_file_name())
        } else {
            destination.to_path_buf()
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Writing quote record to {}", path.display());

        let mut writer = BufWriter::new(File::create(&path)?);
        writeln!(
            writer,
            "{}",
            Self::line(CSV_HEADER.iter().map(|column| column.to_string()))
        )?;
        writeln!(writer, "{}", Self::line(Self::record(quote)))?;
        writer.flush()?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presscost_domain::{Money, QuoteInput, QuoteResult};

    fn quote() -> Quote {
        Quote {
            input: QuoteInput::new("Social Monitoring", 15, 3)
                .with_platforms(["Facebook", "Instagram"])
                .with_daily_alerts(3)
                .with_region("GCC")
                .with_country("UAE")
                .with_conversion_rate(3.67),
            result: QuoteResult {
                setup_cost: Money::new(109.14),
                monthly_cost: Money::new(634.2105),
                total_cost: Money::new(2011.7715),
                total_cost_local: Money::new(7383.201405),
            },
            setup_hours: 3.0,
            monthly_hours: 43.35,
        }
    }

    #[test]
    fn test_writes_header_and_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quote.csv");

        let written = CsvQuoteExporter::new().export(&quote(), &path).unwrap();
        let content = std::fs::read_to_string(&written).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Region,Country,Service Type,Project Duration (months),Conversion Rate,\
             Setup Cost (USD),Monthly Cost (USD),Total Cost (USD),Total Cost (LCY)"
        );
        assert_eq!(
            lines[1],
            "GCC,UAE,Social Monitoring,3,3.67,109.14,634.21,2011.77,7383.20"
        );
    }

    #[test]
    fn test_directory_destination_gets_generated_name() {
        let dir = tempfile::tempdir().unwrap();

        let written = CsvQuoteExporter::new().export(&quote(), dir.path()).unwrap();

        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("csv"));
        assert!(written.starts_with(dir.path()));
        assert!(written
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap()
            .starts_with("quote-"));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("q3").join("quote.csv");

        let written = CsvQuoteExporter::new().export(&quote(), &path).unwrap();
        assert!(written.exists());
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut quote = quote();
        quote.input.region = Some("MENA, North Africa".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quote.csv");
        let written = CsvQuoteExporter::new().export(&quote, &path).unwrap();

        let content = std::fs::read_to_string(&written).unwrap();
        assert!(content.contains("\"MENA, North Africa\""));
    }
}
