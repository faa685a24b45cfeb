//! Repository for the `sections` table.
//!
//! Listing always orders by `sort_order` then `id` so ties resolve by
//! insertion sequence. Deletes never renumber the remaining sort keys.

use pagecraft_core::types::DbId;

use crate::models::section::{NewSection, Section, UpdateSection};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, kind, label, sort_order, is_visible, config, created_at, updated_at";

/// Provides CRUD operations for sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Insert a fully resolved new section, returning the created row.
    pub async fn create(pool: &DbPool, input: &NewSection) -> Result<Section, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO sections (project_id, kind, label, sort_order, is_visible, config, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(input.project_id)
            .bind(&input.kind)
            .bind(&input.label)
            .bind(input.sort_order)
            .bind(input.is_visible)
            .bind(&input.config)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a section by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = ?1");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's sections in render order (sort key ascending,
    /// ties by insertion sequence).
    pub async fn list_by_project(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections WHERE project_id = ?1 ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Sort key for the next section appended to a project:
    /// `max(sort_order) + 1`, or 0 for an empty project.
    pub async fn next_sort_order(pool: &DbPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        let (next,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM sections WHERE project_id = ?1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await?;
        Ok(next)
    }

    /// Partially update a section. Only non-`None` fields in `input` are
    /// applied; `updated_at` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateSection,
    ) -> Result<Option<Section>, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "UPDATE sections SET
                label = COALESCE(?2, label),
                sort_order = COALESCE(?3, sort_order),
                is_visible = COALESCE(?4, is_visible),
                config = COALESCE(?5, config),
                updated_at = ?6
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(input.sort_order)
            .bind(input.is_visible)
            .bind(&input.config)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Replace a section's config wholesale. Distinct from the partial
    /// update: the stored document is swapped, not merged. This is the
    /// AI-edit persistence path.
    pub async fn replace_config(
        pool: &DbPool,
        id: DbId,
        config: &serde_json::Value,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET config = ?2, updated_at = ?3 WHERE id = ?1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(config)
            .bind(chrono::Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Flip a section's visibility flag, returning the updated row.
    pub async fn toggle_visibility(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET is_visible = 1 - is_visible, updated_at = ?2
             WHERE id = ?1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .bind(chrono::Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a section. Remaining sort keys are left untouched; gaps
    /// are handled by sorting, never by renumbering.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
