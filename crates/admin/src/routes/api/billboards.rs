//! Billboard API endpoints.
//!
//! All routes are nested under a store; a billboard is only addressable
//! through the store that owns it.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use marquee_core::{BillboardDraft, BillboardId, FormSchema, StoreId};

use crate::db::{BillboardRepository, StoreRepository};
use crate::error::AppError;
use crate::models::Billboard;
use crate::state::AppState;

/// Build the billboard API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/stores/{store_id}/billboards",
            get(list_billboards).post(create_billboard),
        )
        .route(
            "/stores/{store_id}/billboards/{billboard_id}",
            get(get_billboard)
                .patch(update_billboard)
                .delete(delete_billboard),
        )
}

/// Billboard representation on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardResponse {
    pub id: BillboardId,
    pub store_id: StoreId,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Billboard> for BillboardResponse {
    fn from(billboard: Billboard) -> Self {
        Self {
            id: billboard.id,
            store_id: billboard.store_id,
            label: billboard.label,
            image_url: billboard.image_url,
            created_at: billboard.created_at,
            updated_at: billboard.updated_at,
        }
    }
}

/// List a store's billboards.
///
/// GET /api/stores/{storeId}/billboards
#[instrument(skip(state))]
async fn list_billboards(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Json<Vec<BillboardResponse>>, AppError> {
    // 404 for a missing store rather than an empty list
    StoreRepository::new(state.pool())
        .get(store_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("store {store_id}")))?;

    let billboards = BillboardRepository::new(state.pool())
        .list_for_store(store_id)
        .await?;

    Ok(Json(
        billboards
            .into_iter()
            .map(BillboardResponse::from)
            .collect(),
    ))
}

/// Create a billboard.
///
/// POST /api/stores/{storeId}/billboards
#[instrument(skip(state))]
async fn create_billboard(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Json(draft): Json<BillboardDraft>,
) -> Result<(StatusCode, Json<BillboardResponse>), AppError> {
    draft.validate()?;

    let billboard = BillboardRepository::new(state.pool())
        .create(store_id, &draft)
        .await?;
    tracing::info!(%store_id, billboard_id = %billboard.id, "billboard created");

    Ok((StatusCode::CREATED, Json(BillboardResponse::from(billboard))))
}

/// Get a billboard.
///
/// GET /api/stores/{storeId}/billboards/{billboardId}
#[instrument(skip(state))]
async fn get_billboard(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
) -> Result<Json<BillboardResponse>, AppError> {
    let billboard = BillboardRepository::new(state.pool())
        .get(store_id, billboard_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("billboard {billboard_id}")))?;

    Ok(Json(BillboardResponse::from(billboard)))
}

/// Update a billboard's editable fields.
///
/// PATCH /api/stores/{storeId}/billboards/{billboardId}
#[instrument(skip(state))]
async fn update_billboard(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
    Json(draft): Json<BillboardDraft>,
) -> Result<Json<BillboardResponse>, AppError> {
    draft.validate()?;

    let billboard = BillboardRepository::new(state.pool())
        .update(store_id, billboard_id, &draft)
        .await?;
    tracing::info!(%store_id, %billboard_id, "billboard updated");

    Ok(Json(BillboardResponse::from(billboard)))
}

/// Delete a billboard.
///
/// DELETE /api/stores/{storeId}/billboards/{billboardId}
///
/// Responds 409 when categories still reference the billboard.
#[instrument(skip(state))]
async fn delete_billboard(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
) -> Result<StatusCode, AppError> {
    BillboardRepository::new(state.pool())
        .delete(store_id, billboard_id)
        .await?;
    tracing::info!(%store_id, %billboard_id, "billboard deleted");

    Ok(StatusCode::NO_CONTENT)
}
