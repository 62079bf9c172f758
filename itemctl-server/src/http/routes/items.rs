//! Item endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::dto::{self, RecordRequest, RecordResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::RecordName;

/// POST /items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<RecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let name = RecordName::new(&req.name)?;
    let item = state.store.create_item(&name, &req.description).await?;

    tracing::info!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(RecordResponse::from(item))))
}

/// GET /items - list all items
async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let items = state.store.list_items().await?;
    Ok(Json(dto::records(items)))
}

/// GET /items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<RecordResponse>, ApiError> {
    let item = state.store.get_item(id).await?;
    Ok(Json(RecordResponse::from(item)))
}

/// PUT /items/{id} - replace name and description
///
/// A missing id surfaces from the re-read; it is reported as a 500, not a 404.
async fn update_item(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    JsonBody(req): JsonBody<RecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let name = RecordName::new(&req.name)?;
    let item = state
        .store
        .update_item(id, &name, &req.description)
        .await
        .map_err(ApiError::Store)?;

    Ok(Json(RecordResponse::from(item)))
}

/// DELETE /items/{id} - delete an item (idempotent)
async fn delete_item(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    state.store.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
