//! Billboard pages: listing plus a create/edit form.
//!
//! One form template serves both modes, branching on whether an existing
//! billboard was loaded.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tracing::instrument;

use marquee_core::{BillboardDraft, BillboardId, FormSchema, StoreId};

use crate::db::{BillboardRepository, RepositoryError, StoreRepository};
use crate::error::AppError;
use crate::filters;
use crate::models::Billboard;
use crate::state::AppState;

use super::FlashParams;

/// Billboard view for template rendering.
#[derive(Debug, Clone)]
pub struct BillboardView {
    pub id: BillboardId,
    pub label: String,
    pub image_url: String,
    pub updated_at: String,
}

impl From<&Billboard> for BillboardView {
    fn from(billboard: &Billboard) -> Self {
        Self {
            id: billboard.id,
            label: billboard.label.clone(),
            image_url: billboard.image_url.clone(),
            updated_at: billboard.updated_at.format("%b %d, %Y").to_string(),
        }
    }
}

/// Billboard listing template.
#[derive(Template)]
#[template(path = "billboards/index.html")]
pub struct BillboardListTemplate {
    pub store_id: StoreId,
    pub store_name: String,
    pub billboards: Vec<BillboardView>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// Billboard create/edit form template.
#[derive(Template)]
#[template(path = "billboards/form.html")]
pub struct BillboardFormTemplate {
    pub store_id: StoreId,
    /// `None` in create mode.
    pub billboard_id: Option<BillboardId>,
    pub title: String,
    pub description: String,
    pub action_label: String,
    pub label_value: String,
    pub image_url_value: String,
    pub label_error: Option<String>,
    pub image_url_error: Option<String>,
}

impl BillboardFormTemplate {
    /// Form presentation for create mode (no initial data).
    fn create_mode(store_id: StoreId) -> Self {
        Self {
            store_id,
            billboard_id: None,
            title: "Create billboard".to_owned(),
            description: "Add a new billboard".to_owned(),
            action_label: "Create".to_owned(),
            label_value: String::new(),
            image_url_value: String::new(),
            label_error: None,
            image_url_error: None,
        }
    }

    /// Form presentation for edit mode, pre-filled from the entity.
    fn edit_mode(billboard: &Billboard) -> Self {
        Self {
            store_id: billboard.store_id,
            billboard_id: Some(billboard.id),
            title: "Edit billboard".to_owned(),
            description: "Edit a billboard.".to_owned(),
            action_label: "Save changes".to_owned(),
            label_value: billboard.label.clone(),
            image_url_value: billboard.image_url.clone(),
            label_error: None,
            image_url_error: None,
        }
    }

    fn with_input(mut self, draft: BillboardDraft, errors: &marquee_core::FormErrors) -> Self {
        self.label_value = draft.label;
        self.image_url_value = draft.image_url;
        self.label_error = errors.message_for("label").map(str::to_owned);
        self.image_url_error = errors.message_for("imageUrl").map(str::to_owned);
        self
    }
}

/// Build the billboards router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/stores/{store_id}/billboards",
            get(billboard_list).post(create_billboard),
        )
        .route("/stores/{store_id}/billboards/new", get(new_billboard_page))
        .route(
            "/stores/{store_id}/billboards/{billboard_id}",
            get(edit_billboard_page).post(update_billboard),
        )
        .route(
            "/stores/{store_id}/billboards/{billboard_id}/delete",
            post(delete_billboard),
        )
}

fn render<T: Template>(template: &T) -> Response {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {e}")),
    )
    .into_response()
}

async fn require_store(state: &AppState, store_id: StoreId) -> Result<String, AppError> {
    StoreRepository::new(state.pool())
        .get(store_id)
        .await?
        .map(|s| s.name)
        .ok_or_else(|| AppError::NotFound(format!("store {store_id}")))
}

/// Render the billboard listing.
///
/// GET /stores/{storeId}/billboards
#[instrument(skip(state))]
async fn billboard_list(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Query(params): Query<FlashParams>,
) -> Result<Response, AppError> {
    let store_name = require_store(&state, store_id).await?;
    let billboards = BillboardRepository::new(state.pool())
        .list_for_store(store_id)
        .await?;

    let success_message = params.success.map(|s| match s.as_str() {
        "billboard_created" => "Billboard created.".to_owned(),
        "billboard_updated" => "Billboard updated.".to_owned(),
        "billboard_deleted" => "Billboard deleted.".to_owned(),
        _ => s,
    });
    let error_message = params.error.map(|e| match e.as_str() {
        "billboard_in_use" => BillboardDraft::DELETE_DEPENDENCY_HINT.to_owned(),
        _ => e,
    });

    let template = BillboardListTemplate {
        store_id,
        store_name,
        billboards: billboards.iter().map(BillboardView::from).collect(),
        success_message,
        error_message,
    };

    Ok(render(&template))
}

/// Render the billboard form in create mode.
///
/// GET /stores/{storeId}/billboards/new
#[instrument(skip(state))]
async fn new_billboard_page(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Response, AppError> {
    require_store(&state, store_id).await?;
    Ok(render(&BillboardFormTemplate::create_mode(store_id)))
}

/// Render the billboard form in edit mode.
///
/// GET /stores/{storeId}/billboards/{billboardId}
#[instrument(skip(state))]
async fn edit_billboard_page(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
) -> Result<Response, AppError> {
    let billboard = BillboardRepository::new(state.pool())
        .get(store_id, billboard_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("billboard {billboard_id}")))?;

    Ok(render(&BillboardFormTemplate::edit_mode(&billboard)))
}

/// Create a billboard from the form.
///
/// POST /stores/{storeId}/billboards
#[instrument(skip(state))]
async fn create_billboard(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Form(draft): Form<BillboardDraft>,
) -> Result<Response, AppError> {
    require_store(&state, store_id).await?;

    if let Err(errors) = draft.validate() {
        let template = BillboardFormTemplate::create_mode(store_id).with_input(draft, &errors);
        return Ok(render(&template));
    }

    let billboard = BillboardRepository::new(state.pool())
        .create(store_id, &draft)
        .await?;
    tracing::info!(%store_id, billboard_id = %billboard.id, "billboard created");

    Ok(
        Redirect::to(&format!("/stores/{store_id}/billboards?success=billboard_created"))
            .into_response(),
    )
}

/// Update a billboard from the form.
///
/// POST /stores/{storeId}/billboards/{billboardId}
#[instrument(skip(state))]
async fn update_billboard(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
    Form(draft): Form<BillboardDraft>,
) -> Result<Response, AppError> {
    let repo = BillboardRepository::new(state.pool());

    if let Err(errors) = draft.validate() {
        let billboard = repo
            .get(store_id, billboard_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("billboard {billboard_id}")))?;
        let template = BillboardFormTemplate::edit_mode(&billboard).with_input(draft, &errors);
        return Ok(render(&template));
    }

    repo.update(store_id, billboard_id, &draft).await?;
    tracing::info!(%store_id, %billboard_id, "billboard updated");

    Ok(
        Redirect::to(&format!("/stores/{store_id}/billboards?success=billboard_updated"))
            .into_response(),
    )
}

/// Delete a billboard.
///
/// POST /stores/{storeId}/billboards/{billboardId}/delete
#[instrument(skip(state))]
async fn delete_billboard(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(StoreId, BillboardId)>,
) -> Result<Response, AppError> {
    match BillboardRepository::new(state.pool())
        .delete(store_id, billboard_id)
        .await
    {
        Ok(()) => {
            tracing::info!(%store_id, %billboard_id, "billboard deleted");
            Ok(
                Redirect::to(&format!("/stores/{store_id}/billboards?success=billboard_deleted"))
                    .into_response(),
            )
        }
        Err(RepositoryError::Conflict(_)) => Ok(Redirect::to(&format!(
            "/stores/{store_id}/billboards?error=billboard_in_use"
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}
