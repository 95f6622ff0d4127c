//! Handlers for `/wish-items`.
//!
//! Listing picks exactly one query mode: a valid `status` wins, then a numeric
//! `category_id`, otherwise everything. Unrecognised query values are ignored
//! rather than rejected, and a repeated key keeps its first value.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;
use wishlist_core::types::DbId;
use wishlist_db::models::wish_item::{CreateWishItem, UpdateWishItem, WishItemListParams};
use wishlist_db::repositories::WishItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /wish-items?status=&category_id=
pub async fn list_wish_items(
    State(state): State<AppState>,
    AppQuery(pairs): AppQuery<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let filter = WishItemListParams::from_pairs(pairs).filter();
    tracing::debug!(?filter, "Listing wish items");

    let items = WishItemRepo::list_filtered(&state.pool, filter).await?;
    Ok(Json(items))
}

/// POST /wish-items
///
/// `status` defaults to `wish`.
pub async fn create_wish_item(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateWishItem>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let item = WishItemRepo::create(&state.pool, &input).await?;

    tracing::info!(wish_item_id = item.id, status = %item.status, "Wish item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /wish-items/{id}
pub async fn get_wish_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = WishItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("WishItem", id))?;
    Ok(Json(item))
}

/// PATCH /wish-items/{id}
///
/// Keys present in the body overwrite the stored value, including an explicit
/// `null` for `description`, `category_id` and `remarks`. Absent keys are kept.
pub async fn update_wish_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateWishItem>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let item = WishItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("WishItem", id))?;

    tracing::info!(wish_item_id = id, status = %item.status, "Wish item updated");

    Ok(Json(item))
}

/// DELETE /wish-items/{id}
///
/// Also removes the item's remarks.
pub async fn delete_wish_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !WishItemRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("WishItem", id));
    }

    tracing::info!(wish_item_id = id, "Wish item deleted");

    Ok(Json(SuccessResponse::ok()))
}
