use axum::routing::get;
use axum::Router;

use crate::handlers::{remarks, wish_items};
use crate::state::AppState;

/// Wish item routes mounted at `/wish-items`.
///
/// ```text
/// GET    /                -> list_wish_items (?status, ?category_id)
/// POST   /                -> create_wish_item
/// GET    /{id}            -> get_wish_item
/// PATCH  /{id}            -> update_wish_item
/// DELETE /{id}            -> delete_wish_item
/// GET    /{id}/remarks    -> remarks::list_remarks
/// POST   /{id}/remarks    -> remarks::create_remark
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(wish_items::list_wish_items).post(wish_items::create_wish_item),
        )
        .route(
            "/{id}",
            get(wish_items::get_wish_item)
                .patch(wish_items::update_wish_item)
                .delete(wish_items::delete_wish_item),
        )
        .route(
            "/{id}/remarks",
            get(remarks::list_remarks).post(remarks::create_remark),
        )
}
