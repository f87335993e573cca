//! Quote export port
//!
//! Defines the interface for writing an evaluated quote outside the
//! process. Implementations live in the infrastructure layer (CSV file).

use presscost_domain::Quote;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by export adapters
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("could not write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("export destination is not writable: {0}")]
    InvalidDestination(String),
}

/// Serialize a quote into a one-shot external record
pub trait QuoteExporter: Send + Sync {
    /// Export the quote, returning the path actually written
    ///
    /// A directory destination gets a generated file name inside it.
    fn export(&self, quote: &Quote, destination: &Path) -> Result<PathBuf, ExportError>;
}
