pub mod categories;
pub mod health;
pub mod remarks;
pub mod wish_items;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// ```text
/// /categories                      list, create
/// /categories/{id}                 get, update, delete
///
/// /wish-items                      list (?status, ?category_id), create
/// /wish-items/{id}                 get, update, delete
/// /wish-items/{id}/remarks         list, create
///
/// /remarks/{id}                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/wish-items", wish_items::router())
        .nest("/remarks", remarks::router())
}
