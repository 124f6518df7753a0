//! Cached, converted catalog listings.

use std::sync::Arc;
use std::time::Duration;

use catalogfx_core::cache::item_page_key;
use catalogfx_core::catalog::{CatalogError, EnrichedItem, ItemFilter, ItemPage, Page};
use catalogfx_core::conversion::convert;
use catalogfx_core::storage::ItemRepository;

use crate::cache::CacheAside;
use crate::rates::{RateProvider, SymbolMemo};
use crate::validation::validate_filter;

/// Lists catalog items through the page cache and converts their prices.
///
/// Pages are cached per normalized filter for `page_ttl`. Writes do not
/// evict cached pages, so a page can be stale for up to one TTL after a
/// mutation.
pub struct CatalogQuery {
    repo: Arc<dyn ItemRepository>,
    cache: CacheAside,
    rates: Arc<RateProvider>,
    page_ttl: Duration,
}

impl CatalogQuery {
    pub fn new(
        repo: Arc<dyn ItemRepository>,
        cache: CacheAside,
        rates: Arc<RateProvider>,
        page_ttl: Duration,
    ) -> Self {
        Self {
            repo,
            cache,
            rates,
            page_ttl,
        }
    }

    /// Returns one page of items matching `filter`, each converted into
    /// the filter's target currencies.
    #[tracing::instrument(skip(self), fields(page = filter.page, page_size = filter.page_size))]
    pub async fn list(&self, filter: &ItemFilter) -> Result<Page<EnrichedItem>, CatalogError> {
        let memo = SymbolMemo::new(&self.rates);
        validate_filter(filter, &memo).await?;

        let key = item_page_key(filter);
        let ItemPage { items, total_items } = self
            .cache
            .get_or_compute_page(&key, self.page_ttl, || async {
                Ok::<_, CatalogError>(self.repo.query_filtered_with_count(filter).await?)
            })
            .await?;

        let targets = filter.distinct_targets();
        let items = if targets.is_empty() || items.is_empty() {
            items
                .into_iter()
                .map(|item| EnrichedItem::new(item, Vec::new()))
                .collect()
        } else {
            let rates = self.rates.rates().await?;
            let symbols = memo.get().await?;
            items
                .into_iter()
                .map(|item| -> Result<EnrichedItem, CatalogError> {
                    let conversions = convert(
                        item.price,
                        &item.origin_currency,
                        &rates,
                        symbols,
                        targets.as_slice(),
                    )?;
                    Ok(EnrichedItem::new(item, conversions))
                })
                .collect::<Result<Vec<_>, CatalogError>>()?
        };

        tracing::debug!(returned = items.len(), total_items, "Listed catalog items");

        Ok(Page::new(items, total_items, filter.page, filter.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use catalogfx_core::cache::Cache;
    use catalogfx_core::catalog::{CatalogItem, ValidationIssue};
    use catalogfx_core::conversion::ConversionResult;

    use crate::cache::MemoryCache;
    use crate::testing::{CountingRepository, FailingCache, FakeRateSource};

    struct Fixture {
        query: CatalogQuery,
        repo: Arc<CountingRepository>,
        source: Arc<FakeRateSource>,
    }

    fn fixture_with(source: FakeRateSource, cache: Arc<dyn Cache>) -> Fixture {
        let repo = Arc::new(CountingRepository::default());
        let source = Arc::new(source);
        let aside = CacheAside::new(cache);
        let rates = Arc::new(RateProvider::new(
            source.clone(),
            aside.clone(),
            Duration::from_secs(3600),
            Duration::from_secs(365 * 24 * 3600),
        ));
        let query = CatalogQuery::new(repo.clone(), aside, rates, Duration::from_secs(120));

        Fixture {
            query,
            repo,
            source,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(FakeRateSource::default(), Arc::new(MemoryCache::new(100)))
    }

    async fn seed(repo: &CountingRepository, items: &[CatalogItem]) {
        for item in items {
            repo.add(item).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_converts_into_target_currency() {
        let f = fixture();
        let item = CatalogItem::new("Produto Teste", dec!(100), "BRL");
        seed(&f.repo, &[item.clone()]).await;

        let filter = ItemFilter::default().with_target_currencies(["USD"]);
        let page = f.query.list(&filter).await.unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.items[0].id, item.id);
        assert_eq!(
            page.items[0].conversions,
            vec![ConversionResult {
                currency: "USD".to_string(),
                name: "United States Dollar".to_string(),
                amount: dec!(22.0),
            }]
        );
    }

    #[tokio::test]
    async fn test_symbol_only_target_is_skipped() {
        let f = fixture();
        seed(&f.repo, &[CatalogItem::new("Pen", dec!(10), "EUR")]).await;

        // GBP has a display name but no rate.
        let filter = ItemFilter::default().with_target_currencies(["GBP", "BRL"]);
        let page = f.query.list(&filter).await.unwrap();

        let codes: Vec<_> = page.items[0]
            .conversions
            .iter()
            .map(|c| c.currency.as_str())
            .collect();
        assert_eq!(codes, vec!["BRL"]);
    }

    #[tokio::test]
    async fn test_same_filter_reordered_ids_hits_cache() {
        let f = fixture();
        let a = CatalogItem::new("Alpha", dec!(1), "EUR");
        let b = CatalogItem::new("Beta", dec!(2), "EUR");
        seed(&f.repo, &[a.clone(), b.clone()]).await;

        let first = f
            .query
            .list(&ItemFilter::default().with_ids([a.id, b.id]))
            .await
            .unwrap();
        let second = f
            .query
            .list(&ItemFilter::default().with_ids([b.id, a.id]))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(f.repo.queries(), 1);
    }

    #[tokio::test]
    async fn test_writes_do_not_evict_cached_pages() {
        let f = fixture();
        seed(&f.repo, &[CatalogItem::new("Alpha", dec!(1), "EUR")]).await;

        let before = f.query.list(&ItemFilter::default()).await.unwrap();
        seed(&f.repo, &[CatalogItem::new("Beta", dec!(2), "EUR")]).await;
        let after = f.query.list(&ItemFilter::default()).await.unwrap();

        assert_eq!(before, after);
        assert_eq!(after.total_items, 1);
    }

    #[tokio::test]
    async fn test_empty_result() {
        let f = fixture();

        let filter = ItemFilter::default().with_target_currencies(["USD"]);
        let page = f.query.list(&filter).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(f.source.rate_fetches(), 0);
    }

    #[tokio::test]
    async fn test_no_targets_fetches_no_rates() {
        let f = fixture();
        seed(&f.repo, &[CatalogItem::new("Alpha", dec!(1), "EUR")]).await;

        let page = f.query.list(&ItemFilter::default()).await.unwrap();

        assert!(page.items[0].conversions.is_empty());
        assert_eq!(f.source.rate_fetches(), 0);
        assert_eq!(f.source.symbol_fetches(), 0);
    }

    #[tokio::test]
    async fn test_total_counts_every_match() {
        let f = fixture();
        let items: Vec<_> = (0..5)
            .map(|i| CatalogItem::new(format!("Lamp {i}"), dec!(10), "USD"))
            .collect();
        seed(&f.repo, &items).await;

        let filter = ItemFilter::default().with_name("lamp").with_page(2, 2);
        let page = f.query.list(&filter).await.unwrap();

        let names: Vec<_> = page.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Lamp 2", "Lamp 3"]);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.page, 2);
    }

    #[tokio::test]
    async fn test_unknown_origin_fails_validation() {
        let f = fixture();

        let filter = ItemFilter::default().with_origin_currency("XXX");
        let error = f.query.list(&filter).await.unwrap_err();

        match error {
            CatalogError::Validation(errors) => {
                assert!(errors.contains(&ValidationIssue::UnknownOriginCurrency));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(f.repo.queries(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_fails_the_listing() {
        let f = fixture_with(FakeRateSource::failing(), Arc::new(MemoryCache::new(100)));
        seed(&f.repo, &[CatalogItem::new("Alpha", dec!(1), "EUR")]).await;

        let filter = ItemFilter::default().with_target_currencies(["USD"]);
        let error = f.query.list(&filter).await.unwrap_err();

        assert!(matches!(error, CatalogError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_cache_failure_fails_the_listing() {
        let f = fixture_with(FakeRateSource::default(), Arc::new(FailingCache));

        let error = f.query.list(&ItemFilter::default()).await.unwrap_err();

        assert!(matches!(error, CatalogError::Cache(_)));
        assert_eq!(f.repo.queries(), 0);
    }

    #[tokio::test]
    async fn test_symbols_fetched_once_per_listing() {
        let f = fixture_with(FakeRateSource::default(), Arc::new(MemoryCache::new(100)));
        seed(&f.repo, &[CatalogItem::new("Alpha", dec!(1), "EUR")]).await;

        let filter = ItemFilter::default()
            .with_origin_currency("EUR")
            .with_target_currencies(["USD", "BRL"]);
        f.query.list(&filter).await.unwrap();

        assert_eq!(f.source.symbol_fetches(), 1);
        assert_eq!(f.source.rate_fetches(), 1);
    }
}
