//! HTTP route handlers for the admin service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Pages (server-rendered)
//! GET  /                       - Store list dashboard
//! POST /stores                 - Create store
//! GET  /stores/{id}/settings   - Store settings form
//! POST /stores/{id}/settings   - Update store
//! POST /stores/{id}/delete     - Delete store
//! GET  /stores/{id}/billboards           - Billboard listing
//! GET  /stores/{id}/billboards/new       - Billboard form (create)
//! POST /stores/{id}/billboards           - Create billboard
//! GET  /stores/{id}/billboards/{bid}     - Billboard form (edit)
//! POST /stores/{id}/billboards/{bid}     - Update billboard
//! POST /stores/{id}/billboards/{bid}/delete - Delete billboard
//!
//! # JSON API (see routes/api)
//! GET|POST         /api/stores
//! GET|PATCH|DELETE /api/stores/{id}
//! GET|POST         /api/stores/{id}/billboards
//! GET|PATCH|DELETE /api/stores/{id}/billboards/{bid}
//! ```
//!
//! Page mutations redirect with `?success=`/`?error=` flash keys which the
//! target page maps to human-readable messages.

pub mod api;
pub mod billboards;
pub mod dashboard;
pub mod settings;

use axum::Router;
use serde::Deserialize;

use crate::state::AppState;

/// Build the full application router (pages + API).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(dashboard::router())
        .merge(settings::router())
        .merge(billboards::router())
        .nest("/api", api::router())
}

/// Flash-message query parameters shared by all pages.
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    pub success: Option<String>,
    pub error: Option<String>,
}
