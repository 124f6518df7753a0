//! Cache-aside reads over any [`Cache`] backend.
//!
//! Reads check the cache first; on a miss the producer runs and its result
//! is stored with the given TTL. Producer failures are never cached, and
//! backend failures are returned to the caller instead of falling back to
//! the producer.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use catalogfx_core::cache::{deserialize_value, serialize_value, Cache, CacheError};
use catalogfx_core::catalog::ItemPage;

/// Cache-aside wrapper around a shared cache backend.
#[derive(Clone)]
pub struct CacheAside {
    cache: Arc<dyn Cache>,
}

impl CacheAside {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Returns the value cached under `key`, or computes and stores it.
    ///
    /// A stored blob that no longer decodes as `T` counts as a miss and is
    /// overwritten by the freshly computed value.
    pub async fn get_or_compute<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        producer: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(bytes) = self.cache.get(key).await? {
            match deserialize_value::<T>(&bytes) {
                Ok(value) => {
                    tracing::trace!(key, "Cache hit");
                    return Ok(value);
                }
                Err(err) => {
                    tracing::warn!(key, error = %err, "Discarding undecodable cache entry");
                }
            }
        }

        tracing::debug!(key, "Cache miss");
        let value = producer().await?;

        let bytes = serialize_value(&value).map_err(CacheError::from)?;
        self.cache.set(key, &bytes, Some(ttl)).await?;

        Ok(value)
    }

    /// [`get_or_compute`](Self::get_or_compute) for a catalog page.
    ///
    /// Items and total count are stored as one blob, so a reader never sees
    /// the items of one computation with the count of another.
    pub async fn get_or_compute_page<E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        producer: F,
    ) -> Result<ItemPage, E>
    where
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ItemPage, E>>,
    {
        self.get_or_compute(key, ttl, producer).await
    }
}
