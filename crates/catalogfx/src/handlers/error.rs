use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalogfx_core::catalog::{catalog_error_to_status_code, CatalogError};
use serde_json::json;

/// Handler error. Catalog errors select their own status; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// A 400 response for input the extractors could not accept.
    pub fn bad_request(message: impl Into<String>) -> Response {
        let message = message.into();
        tracing::warn!(%message, "Rejected request");
        error_body(StatusCode::BAD_REQUEST, message)
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self.0.downcast_ref::<CatalogError>() {
            Some(catalog_error) => StatusCode::from_u16(catalog_error_to_status_code(catalog_error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = %status_code, error = %self.0, "Request rejected");
        }

        error_body(status_code, self.0.to_string())
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
