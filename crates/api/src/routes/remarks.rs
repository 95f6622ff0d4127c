use axum::routing::get;
use axum::Router;

use crate::handlers::remarks;
use crate::state::AppState;

/// Remark routes mounted at `/remarks`.
///
/// Listing and creation are scoped to a wish item and live under
/// `/wish-items/{id}/remarks`.
///
/// ```text
/// GET    /{id}      -> get_remark
/// PATCH  /{id}      -> update_remark
/// DELETE /{id}      -> delete_remark
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(remarks::get_remark)
            .patch(remarks::update_remark)
            .delete(remarks::delete_remark),
    )
}
