use std::sync::Arc;
use std::time::Duration;

use catalogfx_core::cache::{RATES_KEY, SYMBOLS_KEY};
use catalogfx_core::catalog::CatalogError;
use catalogfx_core::rates::{RateSource, RateTable, SymbolTable};

use crate::cache::CacheAside;

/// Rates and symbols from a [`RateSource`], cached under fixed keys.
///
/// Each table has its own TTL. Source failures are returned as
/// `CatalogError::Upstream` and never cached.
pub struct RateProvider {
    source: Arc<dyn RateSource>,
    cache: CacheAside,
    rates_ttl: Duration,
    symbols_ttl: Duration,
}

impl RateProvider {
    pub fn new(
        source: Arc<dyn RateSource>,
        cache: CacheAside,
        rates_ttl: Duration,
        symbols_ttl: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            rates_ttl,
            symbols_ttl,
        }
    }

    /// Returns the rate table, fetching it from the source on a cache miss.
    #[tracing::instrument(skip(self))]
    pub async fn rates(&self) -> Result<RateTable, CatalogError> {
        self.cache
            .get_or_compute(RATES_KEY, self.rates_ttl, || async {
                Ok(self.source.fetch_rates().await?)
            })
            .await
    }

    /// Returns the symbol table, fetching it from the source on a cache miss.
    #[tracing::instrument(skip(self))]
    pub async fn symbols(&self) -> Result<SymbolTable, CatalogError> {
        self.cache
            .get_or_compute(SYMBOLS_KEY, self.symbols_ttl, || async {
                Ok(self.source.fetch_symbols().await?)
            })
            .await
    }
}
