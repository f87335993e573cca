//! Application layer for presscost
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::quote_exporter::{ExportError, QuoteExporter};
pub use use_cases::build_quote::{BuildQuoteError, BuildQuoteUseCase};
pub use use_cases::export_quote::{ExportQuoteError, ExportQuoteUseCase};
