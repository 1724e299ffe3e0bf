//! Store list dashboard.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tracing::instrument;

use marquee_core::{FormSchema, StoreId, StoreSettings};

use crate::db::StoreRepository;
use crate::error::AppError;
use crate::filters;
use crate::models::Store;
use crate::state::AppState;

use super::FlashParams;

/// Store view for template rendering.
#[derive(Debug, Clone)]
pub struct StoreView {
    pub id: StoreId,
    pub name: String,
    pub created_at: String,
}

impl From<&Store> for StoreView {
    fn from(store: &Store) -> Self {
        Self {
            id: store.id,
            name: store.name.clone(),
            created_at: store.created_at.format("%b %d, %Y").to_string(),
        }
    }
}

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub stores: Vec<StoreView>,
    pub name_value: String,
    pub name_error: Option<String>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/stores", post(create_store))
}

fn render(template: &DashboardTemplate) -> Response {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {e}")),
    )
    .into_response()
}

/// Render the store list dashboard.
///
/// GET /
#[instrument(skip(state))]
async fn dashboard_page(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Result<Response, AppError> {
    let stores = StoreRepository::new(state.pool()).list().await?;

    let success_message = params.success.map(|s| match s.as_str() {
        "store_deleted" => "Store deleted.".to_owned(),
        _ => s,
    });
    let error_message = params.error;

    let template = DashboardTemplate {
        stores: stores.iter().map(StoreView::from).collect(),
        name_value: String::new(),
        name_error: None,
        success_message,
        error_message,
    };

    Ok(render(&template))
}

/// Create a store from the dashboard form.
///
/// POST /stores
///
/// Invalid input re-renders the dashboard with inline field errors; success
/// redirects to the new store's settings page.
#[instrument(skip(state))]
async fn create_store(
    State(state): State<AppState>,
    Form(settings): Form<StoreSettings>,
) -> Result<Response, AppError> {
    let repo = StoreRepository::new(state.pool());

    if let Err(errors) = settings.validate() {
        let stores = repo.list().await?;
        let template = DashboardTemplate {
            stores: stores.iter().map(StoreView::from).collect(),
            name_value: settings.name,
            name_error: errors.message_for("name").map(str::to_owned),
            success_message: None,
            error_message: None,
        };
        return Ok(render(&template));
    }

    let store = repo.create(&settings).await?;
    tracing::info!(store_id = %store.id, "store created");

    Ok(Redirect::to(&format!("/stores/{}/settings?success=store_created", store.id)).into_response())
}
