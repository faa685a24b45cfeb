//! Section entity model and DTOs.

use pagecraft_core::kind::SectionKind;
use pagecraft_core::render::SectionView;
use pagecraft_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A section row from the `sections` table.
///
/// `kind` is stored as a free string: unrecognized tags are a valid
/// runtime state, so the typed [`SectionKind`] view is derived on demand.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub project_id: DbId,
    pub kind: String,
    pub label: String,
    /// Sort key within the project; unique in practice but gaps are
    /// permitted and never compacted.
    pub sort_order: i64,
    pub is_visible: bool,
    /// Kind-tagged config document, validated at the write boundary.
    pub config: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Section {
    /// The typed kind tag of this section.
    pub fn section_kind(&self) -> SectionKind {
        SectionKind::parse(&self.kind)
    }

    /// Project this row into the renderer's input shape.
    pub fn view(&self) -> SectionView {
        SectionView {
            id: self.id,
            kind: self.section_kind(),
            sort_order: self.sort_order,
            is_visible: self.is_visible,
            config: self.config.clone(),
        }
    }
}

/// Fully resolved insert payload for a new section.
///
/// Handlers resolve template defaults and the sort key before this
/// reaches the repository.
#[derive(Debug, Clone)]
pub struct NewSection {
    pub project_id: DbId,
    pub kind: String,
    pub label: String,
    pub sort_order: i64,
    pub is_visible: bool,
    pub config: serde_json::Value,
}

/// DTO for partially updating a section. Omitted fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSection {
    pub label: Option<String>,
    pub sort_order: Option<i64>,
    pub is_visible: Option<bool>,
    pub config: Option<serde_json::Value>,
}
