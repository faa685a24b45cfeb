//! Handlers for the `/sections` resource and project-scoped section routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pagecraft_core::error::CoreError;
use pagecraft_core::kind::SectionKind;
use pagecraft_core::section::SectionConfig;
use pagecraft_core::templates;
use pagecraft_core::types::DbId;
use pagecraft_db::models::section::{NewSection, Section, UpdateSection};
use pagecraft_db::repositories::{ProjectRepo, SectionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::project::find_project;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for adding a section to a project.
///
/// Only `kind` is required; label, config, sort key, and visibility all
/// default from the kind's template when omitted.
#[derive(Debug, Deserialize)]
pub struct AddSection {
    pub kind: String,
    pub label: Option<String>,
    pub config: Option<serde_json::Value>,
    pub sort_order: Option<i64>,
    pub is_visible: Option<bool>,
}

/// GET /api/v1/projects/{project_id}/sections
///
/// Sections in render order: sort key ascending, ties by insertion.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Section>>>> {
    find_project(&state, project_id).await?;
    let sections = SectionRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/projects/{project_id}/sections
///
/// Adds a section of the given kind. Unknown kinds succeed with an empty
/// template config: a degraded state, not an error. A supplied config is
/// shape-checked against the kind before anything is written.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<AddSection>,
) -> AppResult<(StatusCode, Json<DataResponse<Section>>)> {
    find_project(&state, project_id).await?;

    if input.kind.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "section kind must not be empty".to_string(),
        )));
    }

    let kind = SectionKind::parse(&input.kind);
    let config = match input.config {
        Some(config) => {
            SectionConfig::validate(&kind, &config).map_err(AppError::Core)?;
            config
        }
        None => templates::section_template(&kind),
    };

    let sort_order = match input.sort_order {
        Some(sort_order) => sort_order,
        None => SectionRepo::next_sort_order(&state.pool, project_id).await?,
    };

    let section = SectionRepo::create(
        &state.pool,
        &NewSection {
            project_id,
            kind: kind.as_str().to_string(),
            label: input.label.unwrap_or_else(|| kind.default_label()),
            sort_order,
            is_visible: input.is_visible.unwrap_or(true),
            config,
        },
    )
    .await?;

    ProjectRepo::touch(&state.pool, project_id).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// GET /api/v1/sections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Section>>> {
    let section = find_section(&state, id).await?;
    Ok(Json(DataResponse { data: section }))
}

/// PATCH /api/v1/sections/{id}
///
/// Partial update: only supplied fields change. A supplied config is
/// shape-checked against the section's kind; on mismatch the input is
/// rejected and no partial write occurs.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSection>,
) -> AppResult<Json<DataResponse<Section>>> {
    let section = find_section(&state, id).await?;

    if let Some(ref config) = input.config {
        SectionConfig::validate(&section.section_kind(), config).map_err(AppError::Core)?;
    }

    let updated = SectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;

    ProjectRepo::touch(&state.pool, updated.project_id).await?;

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/sections/{id}/toggle-visibility
///
/// Involution: applying it twice restores the original flag.
pub async fn toggle_visibility(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Section>>> {
    let section = SectionRepo::toggle_visibility(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;
    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/sections/{id}
///
/// Remaining sort keys are never renumbered; render order relies on
/// sorting, not contiguity.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SectionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))
    }
}

/// POST /api/v1/sections/{id}/duplicate
///
/// Declared in the interface but deferred; always answers with a clear
/// "unsupported" signal instead of pretending success.
pub async fn duplicate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_section(&state, id).await?;
    Err(AppError::Core(CoreError::Unsupported(
        "section duplication is not yet available",
    )))
}

pub(crate) async fn find_section(state: &AppState, id: DbId) -> AppResult<Section> {
    SectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))
}
