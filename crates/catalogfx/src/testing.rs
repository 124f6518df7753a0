//! Test doubles shared by unit tests across the crate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal_macros::dec;
use uuid::Uuid;

use catalogfx_core::cache::{Cache, CacheError, Result as CacheResult};
use catalogfx_core::catalog::{CatalogItem, ItemFilter, ItemPage};
use catalogfx_core::rates::{RateError, RateSource, RateTable, Result as RateResult, SymbolTable};
use catalogfx_core::storage::{ItemRepository, Result as RepoResult};

use crate::storage::InMemoryItemRepository;

/// Rate source with fixed tables that counts how often it is asked.
///
/// Rates: EUR 1, BRL 5.0, USD 1.1, JPY 161.25.
/// Symbols: EUR, BRL, USD and GBP (GBP has no rate).
pub struct FakeRateSource {
    rates: RateTable,
    symbols: SymbolTable,
    fail: bool,
    rate_calls: AtomicUsize,
    symbol_calls: AtomicUsize,
}

impl Default for FakeRateSource {
    fn default() -> Self {
        let rates = [
            ("EUR", dec!(1)),
            ("BRL", dec!(5.0)),
            ("USD", dec!(1.1)),
            ("JPY", dec!(161.25)),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();
        let symbols = [
            ("EUR", "Euro"),
            ("BRL", "Brazilian Real"),
            ("USD", "United States Dollar"),
            ("GBP", "British Pound Sterling"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();

        Self {
            rates,
            symbols,
            fail: false,
            rate_calls: AtomicUsize::new(0),
            symbol_calls: AtomicUsize::new(0),
        }
    }
}

impl FakeRateSource {
    /// A source that answers every request with `success: false`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rate_fetches(&self) -> usize {
        self.rate_calls.load(Ordering::SeqCst)
    }

    pub fn symbol_fetches(&self) -> usize {
        self.symbol_calls.load(Ordering::SeqCst)
    }

    fn unsuccessful(resource: &'static str) -> RateError {
        RateError::Unsuccessful {
            resource,
            reason: "101: invalid_access_key".to_string(),
        }
    }
}

#[async_trait]
impl RateSource for FakeRateSource {
    async fn fetch_rates(&self) -> RateResult<RateTable> {
        self.rate_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::unsuccessful("rates"));
        }
        Ok(self.rates.clone())
    }

    async fn fetch_symbols(&self) -> RateResult<SymbolTable> {
        self.symbol_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::unsuccessful("symbols"));
        }
        Ok(self.symbols.clone())
    }
}

/// Cache backend that is always unreachable.
pub struct FailingCache;

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }
}

/// In-memory repository that counts filtered queries.
#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryItemRepository,
    queries: AtomicUsize,
}

impl CountingRepository {
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemRepository for CountingRepository {
    async fn add(&self, item: &CatalogItem) -> RepoResult<CatalogItem> {
        self.inner.add(item).await
    }

    async fn get(&self, id: Uuid) -> RepoResult<Option<CatalogItem>> {
        self.inner.get(id).await
    }

    async fn list_all(&self) -> RepoResult<Vec<CatalogItem>> {
        self.inner.list_all().await
    }

    async fn update(&self, item: &CatalogItem) -> RepoResult<()> {
        self.inner.update(item).await
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.inner.delete(id).await
    }

    async fn query_filtered_with_count(&self, filter: &ItemFilter) -> RepoResult<ItemPage> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query_filtered_with_count(filter).await
    }
}
