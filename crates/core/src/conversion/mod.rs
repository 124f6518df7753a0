//! Currency conversion through a common pivot currency.
//!
//! Rate tables express every currency relative to the pivot (EUR for the
//! Fixer service), so any pair converts as origin -> pivot -> target.
//! All arithmetic is decimal; nothing here rounds.

mod engine;
mod error;

pub use engine::{convert, convert_amount, ConversionResult};
pub use error::ConversionError;
