//! Collection endpoints, including membership management

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::http::dto::{self, MembershipRequest, RecordRequest, RecordResponse};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, MembershipIds, RecordId};
use crate::http::server::AppState;
use crate::models::{MemberId, RecordName};

/// POST /collections - create a collection
async fn create_collection(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<RecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let name = RecordName::new(&req.name)?;
    let collection = state
        .store
        .create_collection(&name, &req.description)
        .await?;

    tracing::info!(id = collection.id, "collection created");
    Ok((StatusCode::CREATED, Json(RecordResponse::from(collection))))
}

/// GET /collections - list all collections
async fn list_collections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let collections = state.store.list_collections().await?;
    Ok(Json(dto::records(collections)))
}

/// GET /collections/{id} - get a single collection
async fn get_collection(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<RecordResponse>, ApiError> {
    let collection = state.store.get_collection(id).await?;
    Ok(Json(RecordResponse::from(collection)))
}

/// PUT /collections/{id} - replace name and description
async fn update_collection(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    JsonBody(req): JsonBody<RecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let name = RecordName::new(&req.name)?;
    let collection = state
        .store
        .update_collection(id, &name, &req.description)
        .await
        .map_err(ApiError::Store)?;

    Ok(Json(RecordResponse::from(collection)))
}

/// DELETE /collections/{id} - delete a collection and its memberships
async fn delete_collection(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    state.store.delete_collection(id).await?;

    tracing::info!(id, "collection deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /collections/{id}/items - add an item to a collection
async fn add_item(
    State(state): State<Arc<AppState>>,
    RecordId(collection_id): RecordId,
    JsonBody(req): JsonBody<MembershipRequest>,
) -> Result<StatusCode, ApiError> {
    let item_id = MemberId::new(req.item_id)?;
    state
        .store
        .add_item_to_collection(collection_id, item_id.get())
        .await?;

    Ok(StatusCode::CREATED)
}

/// GET /collections/{id}/items - list the items in a collection
async fn list_items(
    State(state): State<Arc<AppState>>,
    RecordId(collection_id): RecordId,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let items = state.store.list_items_in_collection(collection_id).await?;
    Ok(Json(dto::records(items)))
}

/// DELETE /collections/{id}/items/{item_id} - remove an item from a collection
async fn remove_item(
    State(state): State<Arc<AppState>>,
    ids: MembershipIds,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .remove_item_from_collection(ids.collection_id, ids.item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Collection routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/collections/{id}",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
        .route("/collections/{id}/items", get(list_items).post(add_item))
        .route("/collections/{id}/items/{item_id}", delete(remove_item))
}
