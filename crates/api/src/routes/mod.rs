//! Route tree construction.

pub mod ai;
pub mod health;
pub mod project;
pub mod section;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 list, create
/// /projects/{id}                            get, update (PATCH), delete
/// /projects/{id}/duplicate                  POST (501, deferred)
/// /projects/{id}/preview                    rendered visual tree (GET)
/// /projects/{project_id}/sections           list, create
///
/// /sections/{id}                            get, update (PATCH), delete
/// /sections/{id}/toggle-visibility          POST
/// /sections/{id}/duplicate                  POST (501, deferred)
///
/// /ai/edit-section                          POST
/// /ai/generate-section                      POST
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/sections", section::router())
        .nest("/ai", ai::router())
}
