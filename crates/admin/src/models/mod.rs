//! Domain models for the admin service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marquee_core::{BillboardId, StoreId};

/// A store managed through the admin.
///
/// The database owns canonical state; instances of this struct are
/// request-scoped snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A billboard belonging to a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Billboard {
    pub id: BillboardId,
    pub store_id: StoreId,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
