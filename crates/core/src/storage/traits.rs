use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::{CatalogItem, ItemFilter, ItemPage};

use super::Result;

/// Repository for catalog item persistence.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persists a new item and returns it as stored.
    ///
    /// Fails with `AlreadyExists` if the ID is taken.
    async fn add(&self, item: &CatalogItem) -> Result<CatalogItem>;

    /// Gets an item by its ID.
    async fn get(&self, id: Uuid) -> Result<Option<CatalogItem>>;

    /// Lists every item, ordered by name then ID.
    async fn list_all(&self) -> Result<Vec<CatalogItem>>;

    /// Overwrites an existing item. Fails with `NotFound` if absent.
    async fn update(&self, item: &CatalogItem) -> Result<()>;

    /// Deletes an item by its ID. Fails with `NotFound` if absent.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Returns the requested page of items matching `filter`, together with
    /// the number of matches before pagination.
    ///
    /// Target currencies in the filter are ignored.
    async fn query_filtered_with_count(&self, filter: &ItemFilter) -> Result<ItemPage>;
}
