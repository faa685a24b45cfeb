//! Route definitions for the AI Edit Adapter surface.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST /edit-section       -> edit_section
/// POST /generate-section   -> generate_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/edit-section", post(ai::edit_section))
        .route("/generate-section", post(ai::generate_section))
}
