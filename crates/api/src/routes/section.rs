//! Route definitions for the `/sections` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::section;
use crate::state::AppState;

/// Routes mounted at `/sections`.
///
/// ```text
/// GET    /{id}                      -> get_by_id
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}/toggle-visibility    -> toggle_visibility
/// POST   /{id}/duplicate            -> duplicate (501, deferred)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(section::get_by_id)
                .patch(section::update)
                .delete(section::delete),
        )
        .route("/{id}/toggle-visibility", post(section::toggle_visibility))
        .route("/{id}/duplicate", post(section::duplicate))
}
