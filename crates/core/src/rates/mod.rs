//! Exchange rates and currency symbols from an external rate source.
//!
//! This module holds the pure parts: the table types, the error taxonomy,
//! payload parsing and the [`RateSource`] seam. Fetching over HTTP and
//! caching live in the application crate.

mod error;
mod payload;
mod traits;

pub use error::{RateError, Result};
pub use payload::{parse_rates_response, parse_symbols_response, ErrorInfo, RatesPayload, SymbolsPayload};
pub use traits::RateSource;

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Currency code -> units of that currency per unit of the pivot currency.
pub type RateTable = HashMap<String, Decimal>;

/// Currency code -> human-readable currency name.
pub type SymbolTable = HashMap<String, String>;
