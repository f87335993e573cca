//! Quote entities: user-supplied parameters and derived results

pub mod catalog;
pub mod input;
pub mod result;

pub use input::QuoteInput;
pub use result::{Quote, QuoteResult};
