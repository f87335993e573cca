//! Interactive quote form

pub mod wizard;

pub use wizard::QuoteForm;
