//! Handlers for `/categories`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;
use wishlist_core::types::DbId;
use wishlist_db::models::category::{CreateCategory, UpdateCategory};
use wishlist_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /categories
///
/// All categories, alphabetical by name.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Category", id))?;
    Ok(Json(category))
}

/// PATCH /categories/{id}
///
/// Omitted fields keep their current value.
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Category", id))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /categories/{id}
///
/// Wish items in the category are kept; their `category_id` becomes null.
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Category", id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(SuccessResponse::ok()))
}
