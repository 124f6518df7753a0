//! Application state shared by every request handler.
//!
//! The storage and cache backends are chosen by feature flags; everything
//! above them is wired the same way for every combination.

use std::sync::Arc;

use catalogfx_core::cache::Cache;
use catalogfx_core::rates::RateSource;
use catalogfx_core::storage::ItemRepository;

use crate::cache::CacheAside;
use crate::config::Config;
use crate::query::CatalogQuery;
use crate::rates::{FixerClient, RateProvider};
use crate::service::CatalogItemService;

/// Shared application state.
///
/// Cloned for each request; the service behind the `Arc` is shared.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CatalogItemService>,
}

impl AppState {
    /// Wires the service graph over the given backends.
    ///
    /// The rate provider and the page cache share one cache backend.
    pub fn build(
        repo: Arc<dyn ItemRepository>,
        cache: Arc<dyn Cache>,
        source: Arc<dyn RateSource>,
        config: &Config,
    ) -> Self {
        let aside = CacheAside::new(cache);
        let rates = Arc::new(RateProvider::new(
            source,
            aside.clone(),
            config.rates_cache_ttl(),
            config.symbols_cache_ttl(),
        ));
        let query = CatalogQuery::new(repo.clone(), aside, rates.clone(), config.page_cache_ttl());

        Self {
            service: Arc::new(CatalogItemService::new(repo, rates, query)),
        }
    }

    /// Creates the state for the backends selected at compile time.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = build_repository(config).await?;
        let cache = build_cache(config).await?;
        let source = Arc::new(FixerClient::from_config(config));

        Ok(Self::build(repo, cache, source, config))
    }
}

// ============================================================================
// Backend selection
// ============================================================================

#[cfg(feature = "inmemory")]
async fn build_repository(_config: &Config) -> Result<Arc<dyn ItemRepository>, anyhow::Error> {
    tracing::info!("Using in-memory item storage");
    Ok(Arc::new(crate::storage::InMemoryItemRepository::new()))
}

#[cfg(feature = "sqlite")]
async fn build_repository(config: &Config) -> Result<Arc<dyn ItemRepository>, anyhow::Error> {
    tracing::info!(path = %config.sqlite_path, "Using SQLite item storage");
    let repo = crate::storage::SqliteItemRepository::new(&config.sqlite_path).await?;
    Ok(Arc::new(repo))
}

#[cfg(feature = "memory")]
async fn build_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
    Ok(Arc::new(crate::cache::MemoryCache::new(
        config.cache_max_entries,
    )))
}

#[cfg(feature = "redis")]
async fn build_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    tracing::info!("Using Redis cache");
    let cache = crate::cache::RedisCache::new(&config.redis_url).await?;
    Ok(Arc::new(cache))
}

#[cfg(test)]
impl AppState {
    /// State over in-memory backends and the given rate source.
    pub fn for_tests(source: Arc<dyn RateSource>) -> Self {
        Self::build(
            Arc::new(crate::storage::InMemoryItemRepository::new()),
            Arc::new(crate::cache::MemoryCache::new(1_000)),
            source,
            &Config::from_lookup(|_| None),
        )
    }
}
