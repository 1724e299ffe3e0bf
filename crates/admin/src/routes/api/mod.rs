//! JSON API routes consumed by `marquee-client` and other HTTP clients.
//!
//! Mounted under `/api` by [`crate::routes::routes`].

pub mod billboards;
pub mod stores;

use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(stores::router())
        .merge(billboards::router())
}
