//! Route definitions for the `/projects` resource.
//!
//! Also nests project-scoped section routes and the rendered preview
//! under `/projects/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, section};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}/duplicate            -> duplicate (501, deferred)
/// GET    /{id}/preview              -> preview
///
/// GET    /{project_id}/sections     -> list_by_project
/// POST   /{project_id}/sections     -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/duplicate", post(project::duplicate))
        .route("/{id}/preview", get(project::preview))
        .route(
            "/{project_id}/sections",
            get(section::list_by_project).post(section::create),
        )
}
