//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use catalogfx_core::catalog::{apply_filter, sort_items, CatalogItem, ItemFilter, ItemPage};
use catalogfx_core::storage::{ItemRepository, RepositoryError, Result};

const ENTITY: &str = "CatalogItem";

/// In-memory item storage.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<Uuid, CatalogItem>>>,
}

impl InMemoryItemRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn add(&self, item: &CatalogItem) -> Result<CatalogItem> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: ENTITY,
                id: item.id.to_string(),
            });
        }
        items.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<CatalogItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<CatalogItem>> {
        let items = self.items.read().await;
        let mut all: Vec<CatalogItem> = items.values().cloned().collect();
        sort_items(&mut all);
        Ok(all)
    }

    async fn update(&self, item: &CatalogItem) -> Result<()> {
        let mut items = self.items.write().await;
        match items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: ENTITY,
                id: item.id.to_string(),
            }),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut items = self.items.write().await;
        if items.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: ENTITY,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn query_filtered_with_count(&self, filter: &ItemFilter) -> Result<ItemPage> {
        let items = self.items.read().await;
        Ok(apply_filter(items.values(), filter))
    }
}
