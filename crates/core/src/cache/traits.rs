use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// A shared string-keyed byte store with per-entry expiration.
///
/// Implementations never hide backend failures: an unreachable store is an
/// `Err`, not a miss.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a live value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;
}
