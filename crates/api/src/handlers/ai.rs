//! Handlers for AI-assisted section editing and generation.

use axum::extract::State;
use axum::Json;
use pagecraft_ai::AiError;
use pagecraft_core::brand::BrandKit;
use pagecraft_core::error::CoreError;
use pagecraft_core::kind::SectionKind;
use pagecraft_core::section::SectionConfig;
use pagecraft_core::types::DbId;
use pagecraft_db::models::section::Section;
use pagecraft_db::repositories::SectionRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::project::find_project;
use crate::handlers::section::find_section;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditSectionRequest {
    pub section_id: DbId,
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateSectionRequest {
    pub project_id: DbId,
    pub kind: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedSection {
    pub config: serde_json::Value,
}

/// POST /api/v1/ai/edit-section
///
/// Sends the section's current config plus the instruction to the AI
/// Edit Adapter and persists the returned config as a full replacement.
/// The stored config is untouched on every failure path, and at most one
/// edit per section id may be in flight at a time.
pub async fn edit_section(
    State(state): State<AppState>,
    Json(input): Json<EditSectionRequest>,
) -> AppResult<Json<DataResponse<Section>>> {
    if input.instruction.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "instruction must not be empty".to_string(),
        )));
    }

    let section = find_section(&state, input.section_id).await?;
    let kind = section.section_kind();

    // The store has no at-most-one-writer guarantee; serialize here.
    // The guard is held across the external call and released on drop.
    let _guard = state.edit_locks.try_acquire(section.id).ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "an AI edit for section {} is already in progress",
            section.id
        )))
    })?;

    let candidate = state
        .ai
        .edit_section(&kind, &section.config, &input.instruction)
        .await?;

    // Shape-check the candidate before persisting; the model's
    // compliance is best-effort, so a mismatched result is a request
    // failure, not a write.
    SectionConfig::validate(&kind, &candidate).map_err(|e| {
        AppError::Ai(AiError::InvalidJson(format!(
            "response does not match the {kind} section shape: {e}"
        )))
    })?;

    let updated = SectionRepo::replace_config(&state.pool, section.id, &candidate)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id: section.id,
        }))?;

    tracing::info!(section_id = updated.id, kind = %kind, "AI edit applied");

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/ai/generate-section
///
/// Generates a standalone config from the project's brand kit. The
/// result is returned to the caller, not attached to any section.
pub async fn generate_section(
    State(state): State<AppState>,
    Json(input): Json<GenerateSectionRequest>,
) -> AppResult<Json<DataResponse<GeneratedSection>>> {
    if input.kind.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "section kind must not be empty".to_string(),
        )));
    }

    let project = find_project(&state, input.project_id).await?;
    let kind = SectionKind::parse(&input.kind);
    let brand_kit = BrandKit::from_value(&project.brand_kit);

    let config = state
        .ai
        .generate_section(&kind, &brand_kit, input.context.as_deref())
        .await?;

    SectionConfig::validate(&kind, &config).map_err(|e| {
        AppError::Ai(AiError::InvalidJson(format!(
            "response does not match the {kind} section shape: {e}"
        )))
    })?;

    Ok(Json(DataResponse {
        data: GeneratedSection { config },
    }))
}
