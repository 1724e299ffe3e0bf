//! Store API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use marquee_core::{FormSchema, StoreId, StoreSettings};

use crate::db::StoreRepository;
use crate::error::AppError;
use crate::models::Store;
use crate::state::AppState;

/// Build the store API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stores", get(list_stores).post(create_store))
        .route(
            "/stores/{store_id}",
            get(get_store).patch(update_store).delete(delete_store),
        )
}

/// Store representation on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: StoreId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

/// List all stores.
///
/// GET /api/stores
#[instrument(skip(state))]
async fn list_stores(State(state): State<AppState>) -> Result<Json<Vec<StoreResponse>>, AppError> {
    let stores = StoreRepository::new(state.pool()).list().await?;
    Ok(Json(stores.into_iter().map(StoreResponse::from).collect()))
}

/// Create a store.
///
/// POST /api/stores
#[instrument(skip(state))]
async fn create_store(
    State(state): State<AppState>,
    Json(settings): Json<StoreSettings>,
) -> Result<(StatusCode, Json<StoreResponse>), AppError> {
    settings.validate()?;

    let store = StoreRepository::new(state.pool()).create(&settings).await?;
    tracing::info!(store_id = %store.id, "store created");

    Ok((StatusCode::CREATED, Json(StoreResponse::from(store))))
}

/// Get a store.
///
/// GET /api/stores/{storeId}
#[instrument(skip(state))]
async fn get_store(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Json<StoreResponse>, AppError> {
    let store = StoreRepository::new(state.pool())
        .get(store_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("store {store_id}")))?;

    Ok(Json(StoreResponse::from(store)))
}

/// Update a store's editable fields.
///
/// PATCH /api/stores/{storeId}
#[instrument(skip(state))]
async fn update_store(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Json(settings): Json<StoreSettings>,
) -> Result<Json<StoreResponse>, AppError> {
    settings.validate()?;

    let store = StoreRepository::new(state.pool())
        .update(store_id, &settings)
        .await?;
    tracing::info!(store_id = %store.id, "store updated");

    Ok(Json(StoreResponse::from(store)))
}

/// Delete a store.
///
/// DELETE /api/stores/{storeId}
///
/// Responds 409 when billboards or categories still reference the store.
#[instrument(skip(state))]
async fn delete_store(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<StatusCode, AppError> {
    StoreRepository::new(state.pool()).delete(store_id).await?;
    tracing::info!(%store_id, "store deleted");

    Ok(StatusCode::NO_CONTENT)
}
