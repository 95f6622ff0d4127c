//! Remark model: a timestamped note owned by one wish item.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use wishlist_core::types::{DbId, Timestamp};

/// A row from the `remarks` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Remark {
    pub id: DbId,
    pub wish_item_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a remark. The parent id comes from the request path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRemark {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// DTO for replacing a remark's content.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRemark {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}
