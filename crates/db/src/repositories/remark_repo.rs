//! Repository for the `remarks` table.

use sqlx::SqlitePool;
use wishlist_core::types::DbId;

use crate::models::remark::Remark;
use crate::SQL_NOW;

/// Column list for remarks queries.
const COLUMNS: &str = "id, wish_item_id, content, created_at, updated_at";

/// Provides CRUD operations for remarks scoped to a wish item.
pub struct RemarkRepo;

impl RemarkRepo {
    /// List remarks for a wish item, newest first.
    pub async fn list_by_wish_item(
        pool: &SqlitePool,
        wish_item_id: DbId,
    ) -> Result<Vec<Remark>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM remarks
             WHERE wish_item_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Remark>(&query)
            .bind(wish_item_id)
            .fetch_all(pool)
            .await
    }

    /// Find a remark by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Remark>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM remarks WHERE id = $1");
        sqlx::query_as::<_, Remark>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Attach a new remark to a wish item.
    ///
    /// Fails with a foreign key violation if the wish item does not exist.
    pub async fn create(
        pool: &SqlitePool,
        wish_item_id: DbId,
        content: &str,
    ) -> Result<Remark, sqlx::Error> {
        let query = format!(
            "INSERT INTO remarks (wish_item_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Remark>(&query)
            .bind(wish_item_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Replace a remark's content.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Remark>, sqlx::Error> {
        let query = format!(
            "UPDATE remarks SET
                content = $2,
                updated_at = {SQL_NOW}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Remark>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a remark by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM remarks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
