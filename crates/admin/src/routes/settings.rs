//! Store settings page: rename the store, see its public API URL, delete it.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tracing::instrument;

use marquee_core::{FormSchema, StoreId, StoreSettings};

use crate::db::{RepositoryError, StoreRepository};
use crate::error::AppError;
use crate::filters;
use crate::models::Store;
use crate::state::AppState;

use super::FlashParams;

/// Settings page template.
#[derive(Template)]
#[template(path = "settings/index.html")]
pub struct SettingsTemplate {
    pub store_id: StoreId,
    pub store_name: String,
    pub name_value: String,
    pub name_error: Option<String>,
    pub api_url: String,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// Build the settings router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stores/{store_id}/settings", get(settings_page).post(update_store))
        .route("/stores/{store_id}/delete", post(delete_store))
}

fn render(template: &SettingsTemplate) -> Response {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {e}")),
    )
    .into_response()
}

async fn load_store(state: &AppState, store_id: StoreId) -> Result<Store, AppError> {
    StoreRepository::new(state.pool())
        .get(store_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("store {store_id}")))
}

/// Render the settings page.
///
/// GET /stores/{storeId}/settings
#[instrument(skip(state))]
async fn settings_page(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Query(params): Query<FlashParams>,
) -> Result<Response, AppError> {
    let store = load_store(&state, store_id).await?;

    let success_message = params.success.map(|s| match s.as_str() {
        "store_created" => "Store created.".to_owned(),
        "store_updated" => "Store updated.".to_owned(),
        _ => s,
    });
    let error_message = params.error.map(|e| match e.as_str() {
        "store_in_use" => StoreSettings::DELETE_DEPENDENCY_HINT.to_owned(),
        _ => e,
    });

    let template = SettingsTemplate {
        store_id: store.id,
        store_name: store.name.clone(),
        name_value: store.name,
        name_error: None,
        api_url: state.config().public_api_url(store_id),
        success_message,
        error_message,
    };

    Ok(render(&template))
}

/// Update the store from the settings form.
///
/// POST /stores/{storeId}/settings
#[instrument(skip(state))]
async fn update_store(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
    Form(settings): Form<StoreSettings>,
) -> Result<Response, AppError> {
    if let Err(errors) = settings.validate() {
        let store = load_store(&state, store_id).await?;
        let template = SettingsTemplate {
            store_id: store.id,
            store_name: store.name,
            name_value: settings.name,
            name_error: errors.message_for("name").map(str::to_owned),
            api_url: state.config().public_api_url(store_id),
            success_message: None,
            error_message: None,
        };
        return Ok(render(&template));
    }

    let store = StoreRepository::new(state.pool())
        .update(store_id, &settings)
        .await?;
    tracing::info!(store_id = %store.id, "store updated");

    Ok(Redirect::to(&format!("/stores/{store_id}/settings?success=store_updated")).into_response())
}

/// Delete the store.
///
/// POST /stores/{storeId}/delete
///
/// A store with dependent rows cannot be deleted; that failure returns to the
/// settings page with the dependency hint instead of navigating away.
#[instrument(skip(state))]
async fn delete_store(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Response, AppError> {
    match StoreRepository::new(state.pool()).delete(store_id).await {
        Ok(()) => {
            tracing::info!(%store_id, "store deleted");
            Ok(Redirect::to("/?success=store_deleted").into_response())
        }
        Err(RepositoryError::Conflict(_)) => Ok(Redirect::to(&format!(
            "/stores/{store_id}/settings?error=store_in_use"
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}
