//! Project entity model and DTOs.

use pagecraft_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    /// Authenticated principal owning this project.
    pub owner: String,
    pub name: String,
    /// Free-form brand kit document (colors, logo reference).
    pub brand_kit: serde_json::Value,
    pub thumbnail: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    /// Defaults to an empty document if omitted.
    pub brand_kit: Option<serde_json::Value>,
    pub thumbnail: Option<String>,
}

/// DTO for partially updating a project. Omitted fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub brand_kit: Option<serde_json::Value>,
    pub thumbnail: Option<String>,
}
