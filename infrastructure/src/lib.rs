//! Infrastructure layer for presscost
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod export;

// Re-export commonly used types
pub use config::file_config::{
    FileConfig, FileExportConfig, FileFormConfig, FileOutputConfig,
};
pub use config::loader::ConfigLoader;
pub use export::csv_exporter::CsvQuoteExporter;
