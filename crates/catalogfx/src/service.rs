//! Catalog item orchestration: validation, CRUD and listing.

use std::sync::Arc;

use uuid::Uuid;

use catalogfx_core::catalog::{CatalogError, CatalogItem, EnrichedItem, ItemDraft, ItemFilter, Page};
use catalogfx_core::storage::ItemRepository;

use crate::query::CatalogQuery;
use crate::rates::{RateProvider, SymbolMemo};
use crate::validation::validate_item;

/// Entry point for every catalog operation the HTTP layer exposes.
pub struct CatalogItemService {
    repo: Arc<dyn ItemRepository>,
    rates: Arc<RateProvider>,
    query: CatalogQuery,
}

impl CatalogItemService {
    pub fn new(repo: Arc<dyn ItemRepository>, rates: Arc<RateProvider>, query: CatalogQuery) -> Self {
        Self { repo, rates, query }
    }

    /// Validates `draft` and stores it under a new identity.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, draft: ItemDraft) -> Result<CatalogItem, CatalogError> {
        validate_item(&draft, &SymbolMemo::new(&self.rates)).await?;

        let item = draft.into_item(Uuid::new_v4());
        let item = self.repo.add(&item).await?;

        tracing::info!(item_id = %item.id, name = %item.name, "Created catalog item");
        Ok(item)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<CatalogItem>, CatalogError> {
        Ok(self.repo.get(id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self.repo.list_all().await?)
    }

    /// Overwrites the mutable fields of an existing item.
    ///
    /// Validation runs first, so an invalid payload is rejected even when
    /// the item does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: Uuid, draft: ItemDraft) -> Result<CatalogItem, CatalogError> {
        validate_item(&draft, &SymbolMemo::new(&self.rates)).await?;

        let mut item = self
            .repo
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound { id })?;
        item.apply(draft);
        self.repo.update(&item).await?;

        tracing::info!(item_id = %id, "Updated catalog item");
        Ok(item)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        if self.repo.get(id).await?.is_none() {
            return Err(CatalogError::NotFound { id });
        }
        self.repo.delete(id).await?;

        tracing::info!(item_id = %id, "Deleted catalog item");
        Ok(())
    }

    /// Filtered, paginated listing with currency conversion.
    pub async fn list(&self, filter: &ItemFilter) -> Result<Page<EnrichedItem>, CatalogError> {
        self.query.list(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use catalogfx_core::catalog::ValidationIssue;
    use rust_decimal_macros::dec;

    use crate::cache::{CacheAside, MemoryCache};
    use crate::storage::InMemoryItemRepository;
    use crate::testing::FakeRateSource;

    fn service_with(source: FakeRateSource) -> CatalogItemService {
        let repo: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
        let aside = CacheAside::new(Arc::new(MemoryCache::new(100)));
        let rates = Arc::new(RateProvider::new(
            Arc::new(source),
            aside.clone(),
            Duration::from_secs(3600),
            Duration::from_secs(3600),
        ));
        let query = CatalogQuery::new(repo.clone(), aside, rates.clone(), Duration::from_secs(120));
        CatalogItemService::new(repo, rates, query)
    }

    fn service() -> CatalogItemService {
        service_with(FakeRateSource::default())
    }

    #[tokio::test]
    async fn test_create_assigns_identity() {
        let service = service();

        let item = service
            .create(ItemDraft::new("Produto Teste", dec!(100), "BRL"))
            .await
            .unwrap();

        assert_eq!(service.get(item.id).await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_item() {
        let service = service();

        let result = service.create(ItemDraft::new("", dec!(-1), "BRL")).await;

        match result {
            Err(CatalogError::Validation(errors)) => {
                assert_eq!(
                    errors.to_string(),
                    "Item name is required., Item price must be greater than zero."
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_fails_when_symbols_unavailable() {
        let service = service_with(FakeRateSource::failing());

        let result = service.create(ItemDraft::new("Pen", dec!(1), "USD")).await;

        assert!(matches!(result, Err(CatalogError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let service = service();
        let created = service
            .create(ItemDraft::new("Pen", dec!(1), "USD"))
            .await
            .unwrap();

        let updated = service
            .update(created.id, ItemDraft::new("Fountain Pen", dec!(25.5), "EUR"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Fountain Pen");
        assert_eq!(service.get(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let service = service();
        let id = Uuid::new_v4();

        let result = service
            .update(id, ItemDraft::new("Pen", dec!(1), "USD"))
            .await;

        assert_eq!(result, Err(CatalogError::NotFound { id }));
    }

    #[tokio::test]
    async fn test_update_invalid_payload_is_validation_error() {
        let service = service();

        let result = service
            .update(Uuid::new_v4(), ItemDraft::new("Pen", dec!(1), "XXX"))
            .await;

        match result {
            Err(CatalogError::Validation(errors)) => {
                assert!(errors.contains(&ValidationIssue::UnknownOriginCurrency));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let item = service
            .create(ItemDraft::new("Pen", dec!(1), "USD"))
            .await
            .unwrap();

        service.delete(item.id).await.unwrap();

        assert_eq!(service.get(item.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_not_found() {
        let service = service();
        let id = Uuid::new_v4();

        assert_eq!(service.delete(id).await, Err(CatalogError::NotFound { id }));
    }

    #[tokio::test]
    async fn test_list_delegates_to_query() {
        let service = service();
        service
            .create(ItemDraft::new("Produto Teste", dec!(100), "BRL"))
            .await
            .unwrap();

        let page = service
            .list(&ItemFilter::default().with_target_currencies(["USD"]))
            .await
            .unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].conversions[0].amount, dec!(22.0));
    }
}
