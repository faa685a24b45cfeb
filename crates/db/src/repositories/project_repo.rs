//! Repository for the `projects` table.

use pagecraft_core::types::DbId;
use serde_json::json;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner, name, brand_kit, thumbnail, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project for `owner`, returning the created row.
    ///
    /// The brand kit defaults to an empty document if omitted.
    pub async fn create(
        pool: &DbPool,
        owner: &str,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let now = chrono::Utc::now();
        let brand_kit = input.brand_kit.clone().unwrap_or_else(|| json!({}));
        let query = format!(
            "INSERT INTO projects (owner, name, brand_kit, thumbnail, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner)
            .bind(&input.name)
            .bind(brand_kit)
            .bind(&input.thumbnail)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an owner's projects, most recently modified first.
    pub async fn list_by_owner(pool: &DbPool, owner: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE owner = ?1 ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner)
            .fetch_all(pool)
            .await
    }

    /// Partially update a project. Only non-`None` fields in `input` are
    /// applied; `updated_at` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let now = chrono::Utc::now();
        let query = format!(
            "UPDATE projects SET
                name = COALESCE(?2, name),
                brand_kit = COALESCE(?3, brand_kit),
                thumbnail = COALESCE(?4, thumbnail),
                updated_at = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.brand_kit)
            .bind(&input.thumbnail)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and every section it owns. Sections go first so
    /// no orphans survive. Returns `true` if the project row existed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query("DELETE FROM sections WHERE project_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bump a project's `updated_at` stamp (after a section mutation).
    pub async fn touch(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE projects SET updated_at = ?2 WHERE id = ?1")
            .bind(id)
            .bind(chrono::Utc::now())
            .execute(pool)
            .await?;
        Ok(())
    }
}
