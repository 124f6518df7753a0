//! Pure functions for mapping catalog errors to HTTP status codes.

use super::CatalogError;
use crate::cache::CacheError;
use crate::storage::repository_error_to_status_code;

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Upstream` -> 502 (Bad Gateway)
/// - `Cache` connection failures -> 503, other cache failures -> 500
/// - `Storage` -> see [`repository_error_to_status_code`]
/// - `Conversion` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use catalogfx_core::catalog::{catalog_error_to_status_code, CatalogError};
/// use uuid::Uuid;
///
/// let error = CatalogError::NotFound { id: Uuid::nil() };
/// assert_eq!(catalog_error_to_status_code(&error), 404);
/// ```
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::Validation(_) => 400,
        CatalogError::NotFound { .. } => 404,
        CatalogError::Upstream(_) => 502,
        CatalogError::Cache(CacheError::ConnectionFailed(_)) => 503,
        CatalogError::Cache(_) => 500,
        CatalogError::Storage(repo_error) => repository_error_to_status_code(repo_error),
        CatalogError::Conversion(_) => 500,
    }
}
