//! Export quote use case
//!
//! Hands an evaluated quote to the configured export adapter.

use crate::ports::quote_exporter::{ExportError, QuoteExporter};
use presscost_domain::Quote;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while exporting a quote
#[derive(Error, Debug)]
pub enum ExportQuoteError {
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Use case for the one-shot quote export
pub struct ExportQuoteUseCase<E: QuoteExporter + 'static> {
    exporter: Arc<E>,
}

impl<E: QuoteExporter + 'static> ExportQuoteUseCase<E> {
    pub fn new(exporter: Arc<E>) -> Self {
        Self { exporter }
    }

    /// Export the quote, returning the path actually written
    pub fn execute(&self, quote: &Quote, destination: &Path) -> Result<PathBuf, ExportQuoteError> {
        let path = self.exporter.export(quote, destination)?;
        info!("Quote exported to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presscost_domain::{Money, QuoteInput, QuoteResult};
    use std::sync::Mutex;

    struct RecordingExporter {
        destinations: Mutex<Vec<PathBuf>>,
    }

    impl QuoteExporter for RecordingExporter {
        fn export(&self, _quote: &Quote, destination: &Path) -> Result<PathBuf, ExportError> {
            self.destinations
                .lock()
                .unwrap()
                .push(destination.to_path_buf());
            Ok(destination.to_path_buf())
        }
    }

    fn quote() -> Quote {
        Quote {
            input: QuoteInput::new("Analysis", 10, 6),
            result: QuoteResult {
                setup_cost: Money::new(109.14),
                monthly_cost: Money::new(400.0),
                total_cost: Money::new(2509.14),
                total_cost_local: Money::new(2509.14),
            },
            setup_hours: 3.0,
            monthly_hours: 25.0,
        }
    }

    #[test]
    fn test_delegates_to_exporter() {
        let exporter = Arc::new(RecordingExporter {
            destinations: Mutex::new(vec![]),
        });
        let use_case = ExportQuoteUseCase::new(Arc::clone(&exporter));

        let written = use_case
            .execute(&quote(), Path::new("quotes/analysis.csv"))
            .unwrap();

        assert_eq!(written, PathBuf::from("quotes/analysis.csv"));
        assert_eq!(exporter.destinations.lock().unwrap().len(), 1);
    }
}
