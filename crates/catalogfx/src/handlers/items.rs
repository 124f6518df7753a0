//! Catalog item handlers.
//!
//! v1 is plain CRUD over stored items. v2 lists items through the page
//! cache with prices converted into the requested currencies.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use catalogfx_core::catalog::{CatalogError, CatalogItem, EnrichedItem, Page};

use crate::{
    handlers::AppError,
    models::{ItemPayload, ListItemsQuery},
    state::AppState,
};

/// List every stored item (GET /api/v1/items).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<CatalogItem>>, AppError> {
    Ok(Json(state.service.list_all().await?))
}

/// Create an item (POST /api/v1/items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(AppError::bad_request(rejection.body_text())),
    };

    let item = state.service.create(payload.into_draft()).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// Get a single item (GET /api/v1/items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CatalogItem>, AppError> {
    let item = state
        .service
        .get(id)
        .await?
        .ok_or(CatalogError::NotFound { id })?;

    Ok(Json(item))
}

/// Replace an item (PUT /api/v1/items/{id}).
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(AppError::bad_request(rejection.body_text())),
    };

    if payload.conflicts_with(id) {
        return Ok(AppError::bad_request(format!(
            "Body id does not match path id {id}"
        )));
    }

    state.service.update(id, payload.into_draft()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Delete an item (DELETE /api/v1/items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Filtered listing with conversions (GET /api/v2/items).
pub async fn list_converted_items(
    State(state): State<AppState>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return Ok(AppError::bad_request(rejection.body_text())),
    };

    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(message) => return Ok(AppError::bad_request(message)),
    };

    let page: Page<EnrichedItem> = state.service.list(&filter).await?;

    Ok(Json(page).into_response())
}
