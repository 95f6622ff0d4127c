//! Handlers for remarks.
//!
//! Listing and creation are nested under `/wish-items/{id}/remarks`; single
//! remarks are addressed at `/remarks/{id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;
use wishlist_core::types::DbId;
use wishlist_db::models::remark::{CreateRemark, UpdateRemark};
use wishlist_db::repositories::RemarkRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /wish-items/{id}/remarks
///
/// Newest first. An unknown wish item simply has no remarks.
pub async fn list_remarks(
    State(state): State<AppState>,
    AppPath(wish_item_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let remarks = RemarkRepo::list_by_wish_item(&state.pool, wish_item_id).await?;
    Ok(Json(remarks))
}

/// POST /wish-items/{id}/remarks
pub async fn create_remark(
    State(state): State<AppState>,
    AppPath(wish_item_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateRemark>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let remark = RemarkRepo::create(&state.pool, wish_item_id, &input.content).await?;

    tracing::info!(remark_id = remark.id, wish_item_id, "Remark created");

    Ok((StatusCode::CREATED, Json(remark)))
}

/// GET /remarks/{id}
pub async fn get_remark(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let remark = RemarkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Remark", id))?;
    Ok(Json(remark))
}

/// PATCH /remarks/{id}
pub async fn update_remark(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRemark>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let remark = RemarkRepo::update(&state.pool, id, &input.content)
        .await?
        .ok_or(AppError::not_found("Remark", id))?;

    tracing::info!(remark_id = id, "Remark updated");

    Ok(Json(remark))
}

/// DELETE /remarks/{id}
pub async fn delete_remark(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !RemarkRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Remark", id));
    }

    tracing::info!(remark_id = id, "Remark deleted");

    Ok(Json(SuccessResponse::ok()))
}
