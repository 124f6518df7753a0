use thiserror::Error;

/// Errors that can occur while converting an amount.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("No rate for currency {0}")]
    UnknownCurrency(String),
    #[error("Rate for currency {0} is zero")]
    ZeroRate(String),
    #[error("Converted amount is out of range")]
    Overflow,
}
