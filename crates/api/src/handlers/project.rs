//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pagecraft_core::error::CoreError;
use pagecraft_core::kind::SectionKind;
use pagecraft_core::render::{self, RenderedSection};
use pagecraft_core::templates;
use pagecraft_core::types::DbId;
use pagecraft_db::models::project::{CreateProject, Project, UpdateProject};
use pagecraft_db::models::section::NewSection;
use pagecraft_db::repositories::{ProjectRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::principal::Principal;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Creates the project and seeds exactly one default hero section at sort
/// key 0. The two writes are deliberately non-atomic: a crash in between
/// leaves a project with zero sections, which downstream code tolerates.
pub async fn create(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "project name must not be empty".to_string(),
        )));
    }
    if let Some(ref brand_kit) = input.brand_kit {
        if !brand_kit.is_object() {
            return Err(AppError::Core(CoreError::Validation(
                "brand_kit must be a JSON object".to_string(),
            )));
        }
    }

    let project = ProjectRepo::create(&state.pool, principal.as_str(), &input).await?;

    let hero = SectionKind::Hero;
    SectionRepo::create(
        &state.pool,
        &NewSection {
            project_id: project.id,
            kind: hero.as_str().to_string(),
            label: hero.default_label(),
            sort_order: 0,
            is_visible: true,
            config: templates::section_template(&hero),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_by_owner(&state.pool, principal.as_str()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = find_project(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PATCH /api/v1/projects/{id}
///
/// Shallow merge: only supplied fields overwrite; a name-only patch
/// leaves the brand kit untouched and vice versa.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "project name must not be empty".to_string(),
            )));
        }
    }
    if let Some(ref brand_kit) = input.brand_kit {
        if !brand_kit.is_object() {
            return Err(AppError::Core(CoreError::Validation(
                "brand_kit must be a JSON object".to_string(),
            )));
        }
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
///
/// Cascades: owned sections are deleted first, so none are orphaned.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// POST /api/v1/projects/{id}/duplicate
///
/// Declared in the interface but deferred; always answers with a clear
/// "unsupported" signal instead of pretending success.
pub async fn duplicate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    // Resolve the id first so a missing project still reports NotFound.
    find_project(&state, id).await?;
    Err(AppError::Core(CoreError::Unsupported(
        "project duplication is not yet available",
    )))
}

/// GET /api/v1/projects/{id}/preview
///
/// The rendered visual tree: visible sections only, in render order.
pub async fn preview(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<RenderedSection>>>> {
    find_project(&state, id).await?;
    let sections = SectionRepo::list_by_project(&state.pool, id).await?;
    let views: Vec<_> = sections.iter().map(|s| s.view()).collect();
    Ok(Json(DataResponse {
        data: render::render_project(&views),
    }))
}

pub(crate) async fn find_project(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}
