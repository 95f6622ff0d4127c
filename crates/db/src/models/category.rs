//! Category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use wishlist_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category. `color` falls back to
/// [`DEFAULT_CATEGORY_COLOR`](wishlist_core::validation::DEFAULT_CATEGORY_COLOR).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "wishlist_core::validation::validate_hex_color"))]
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub color: Option<String>,
}

/// DTO for updating a category. Omitted fields keep their current value;
/// neither field accepts `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub name: Option<String>,
    #[validate(custom(function = "wishlist_core::validation::validate_hex_color"))]
    #[serde(default, deserialize_with = "wishlist_core::nullable::deserialize_present")]
    pub color: Option<String>,
}
