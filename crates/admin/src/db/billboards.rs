//! Billboard repository for database operations.
//!
//! All lookups are scoped to a store: a billboard ID from another store is
//! treated as not found.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use marquee_core::{BillboardDraft, BillboardId, StoreId};

use super::{RepositoryError, is_foreign_key_violation};
use crate::models::Billboard;

/// Internal row type for `PostgreSQL` billboard queries.
#[derive(Debug, sqlx::FromRow)]
struct BillboardRow {
    id: i32,
    store_id: i32,
    label: String,
    image_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BillboardRow> for Billboard {
    fn from(row: BillboardRow) -> Self {
        Self {
            id: BillboardId::new(row.id),
            store_id: StoreId::new(row.store_id),
            label: row.label,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for billboard rows.
pub struct BillboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BillboardRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a store's billboards, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<Billboard>, RepositoryError> {
        let rows = sqlx::query_as::<_, BillboardRow>(
            r"
            SELECT id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE store_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(store_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Billboard::from).collect())
    }

    /// Get a billboard by ID within a store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(
        &self,
        store_id: StoreId,
        id: BillboardId,
    ) -> Result<Option<Billboard>, RepositoryError> {
        let row = sqlx::query_as::<_, BillboardRow>(
            r"
            SELECT id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE store_id = $1 AND id = $2
            ",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Billboard::from))
    }

    /// Create a billboard from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the store does not exist, or a database error.
    pub async fn create(
        &self,
        store_id: StoreId,
        draft: &BillboardDraft,
    ) -> Result<Billboard, RepositoryError> {
        let row = sqlx::query_as::<_, BillboardRow>(
            r"
            INSERT INTO billboards (store_id, label, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, store_id, label, image_url, created_at, updated_at
            ",
        )
        .bind(store_id)
        .bind(&draft.label)
        .bind(&draft.image_url)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // Inserting against a missing store violates the store FK
            if is_foreign_key_violation(&e) {
                RepositoryError::NotFound
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(Billboard::from(row))
    }

    /// Update a billboard's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the billboard does not exist in this store, or a
    /// database error.
    pub async fn update(
        &self,
        store_id: StoreId,
        id: BillboardId,
        draft: &BillboardDraft,
    ) -> Result<Billboard, RepositoryError> {
        let row = sqlx::query_as::<_, BillboardRow>(
            r"
            UPDATE billboards
            SET label = $3, image_url = $4, updated_at = NOW()
            WHERE store_id = $1 AND id = $2
            RETURNING id, store_id, label, image_url, created_at, updated_at
            ",
        )
        .bind(store_id)
        .bind(id)
        .bind(&draft.label)
        .bind(&draft.image_url)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(Billboard::from(row))
    }

    /// Delete a billboard.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the billboard does not exist in this store,
    /// `Conflict` if categories still reference it, or a database error.
    pub async fn delete(&self, store_id: StoreId, id: BillboardId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM billboards WHERE store_id = $1 AND id = $2")
            .bind(store_id)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    RepositoryError::Conflict("billboard still has dependent rows".to_string())
                } else {
                    RepositoryError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
