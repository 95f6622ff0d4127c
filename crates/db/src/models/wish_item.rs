//! Wish item model, DTOs, and list filtering.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use wishlist_core::types::{DbId, Timestamp};
use wishlist_core::wish_status::WishStatus;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `wish_items` table.
///
/// `remarks` is the free-text notes column on the item itself. It is unrelated
/// to the rows in the `remarks` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct WishItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: WishStatus,
    pub category_id: Option<DbId>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a wish item. `status` defaults to `wish`.
///
/// Only `category_id` accepts an explicit `null`; the other optional fields
/// may be omitted but not nulled.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateWishItem {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub status: Option<WishStatus>,
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub remarks: Option<String>,
}

/// DTO for a partial update.
///
/// Nullable columns use `Option<Option<T>>`: `None` leaves the column alone,
/// `Some(None)` clears it, `Some(Some(v))` overwrites it. `title` and
/// `status` back `NOT NULL` columns and reject `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWishItem {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub status: Option<WishStatus>,
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_nullable")]
    pub category_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_nullable")]
    pub remarks: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Which subset of wish items a listing returns. Exactly one mode applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishItemFilter {
    All,
    Status(WishStatus),
    Category(DbId),
}

/// Query parameters for `GET /wish-items`.
///
/// Both values are kept as raw strings so that an unrecognised status or a
/// non-numeric category id falls through to the next mode instead of failing
/// the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishItemListParams {
    pub status: Option<String>,
    pub category_id: Option<String>,
}

impl WishItemListParams {
    /// Collect the recognised keys from decoded query pairs. A repeated key
    /// keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "status" => &mut params.status,
                "category_id" => &mut params.category_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Resolve the listing mode. A valid `status` wins over `category_id`.
    pub fn filter(&self) -> WishItemFilter {
        if let Some(status) = self.status.as_deref().and_then(WishStatus::parse_filter) {
            return WishItemFilter::Status(status);
        }
        if let Some(category_id) = self
            .category_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<DbId>().ok())
        {
            return WishItemFilter::Category(category_id);
        }
        WishItemFilter::All
    }
}
