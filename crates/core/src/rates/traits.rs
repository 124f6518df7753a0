use async_trait::async_trait;

use super::{RateTable, Result, SymbolTable};

/// A source of exchange rates and currency symbols.
///
/// Implementations perform I/O and carry no caching of their own.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the latest rate table, relative to the source's pivot currency.
    async fn fetch_rates(&self) -> Result<RateTable>;

    /// Fetches the table of supported currency codes and their names.
    async fn fetch_symbols(&self) -> Result<SymbolTable>;
}
