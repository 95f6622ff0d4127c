//! Repository for the `wish_items` table.
//!
//! Listings are newest first. `id` breaks ties between rows created within
//! the same millisecond.

use sqlx::SqlitePool;
use wishlist_core::types::DbId;
use wishlist_core::wish_status::WishStatus;

use crate::models::wish_item::{CreateWishItem, UpdateWishItem, WishItem, WishItemFilter};
use crate::SQL_NOW;

/// Column list for wish_items queries.
const COLUMNS: &str = "\
    id, title, description, status, category_id, remarks, \
    created_at, updated_at";

/// Ordering shared by every listing.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD and filtered listing for wish items.
pub struct WishItemRepo;

impl WishItemRepo {
    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// List all wish items.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<WishItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wish_items {NEWEST_FIRST}");
        sqlx::query_as::<_, WishItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// List wish items with the given status.
    pub async fn list_by_status(
        pool: &SqlitePool,
        status: WishStatus,
    ) -> Result<Vec<WishItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wish_items WHERE status = $1 {NEWEST_FIRST}");
        sqlx::query_as::<_, WishItem>(&query)
            .bind(status.as_str())
            .fetch_all(pool)
            .await
    }

    /// List wish items assigned to a category.
    pub async fn list_by_category(
        pool: &SqlitePool,
        category_id: DbId,
    ) -> Result<Vec<WishItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM wish_items WHERE category_id = $1 {NEWEST_FIRST}");
        sqlx::query_as::<_, WishItem>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Dispatch to the listing selected by `filter`.
    pub async fn list_filtered(
        pool: &SqlitePool,
        filter: WishItemFilter,
    ) -> Result<Vec<WishItem>, sqlx::Error> {
        match filter {
            WishItemFilter::All => Self::list(pool).await,
            WishItemFilter::Status(status) => Self::list_by_status(pool, status).await,
            WishItemFilter::Category(category_id) => {
                Self::list_by_category(pool, category_id).await
            }
        }
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Find a wish item by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<WishItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wish_items WHERE id = $1");
        sqlx::query_as::<_, WishItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a wish item, returning the created row.
    ///
    /// Empty `description` / `remarks` strings are stored as NULL.
    pub async fn create(pool: &SqlitePool, input: &CreateWishItem) -> Result<WishItem, sqlx::Error> {
        let status = input.status.unwrap_or_default();
        let query = format!(
            "INSERT INTO wish_items (title, description, status, category_id, remarks)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishItem>(&query)
            .bind(&input.title)
            .bind(non_empty(input.description.as_deref()))
            .bind(status.as_str())
            .bind(input.category_id)
            .bind(non_empty(input.remarks.as_deref()))
            .fetch_one(pool)
            .await
    }

    /// Partially update a wish item.
    ///
    /// `title` and `status` use `COALESCE`. The nullable columns use a
    /// provided-flag so an explicit `null` clears the value while an absent
    /// field keeps it.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateWishItem,
    ) -> Result<Option<WishItem>, sqlx::Error> {
        let query = format!(
            "UPDATE wish_items SET
                title       = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status      = COALESCE($5, status),
                category_id = CASE WHEN $6 THEN $7 ELSE category_id END,
                remarks     = CASE WHEN $8 THEN $9 ELSE remarks END,
                updated_at  = {SQL_NOW}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.status.map(WishStatus::as_str))
            .bind(input.category_id.is_some())
            .bind(input.category_id.flatten())
            .bind(input.remarks.is_some())
            .bind(input.remarks.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a wish item by ID. Returns `true` if a row was deleted.
    ///
    /// Remarks attached to the item are removed by cascade.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wish_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
