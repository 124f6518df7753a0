//! Liveness probe.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching storage, cache or the rate source.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
