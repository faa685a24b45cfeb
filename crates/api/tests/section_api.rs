//! Integration tests for section composition: ordering, visibility,
//! partial updates, deferred duplication, and the rendered preview.

mod common;

use axum::http::StatusCode;
use common::{add_section, body_json, create_project, delete, get, patch_json, post_empty, post_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn sections_get_sequential_sort_keys(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Ordered").await;
    let project_id = project["id"].as_i64().unwrap();

    // Clear the seeded hero so the project starts empty.
    let sections = body_json(get(app.clone(), &format!("/api/v1/projects/{project_id}/sections")).await)
        .await["data"]
        .clone();
    let hero_id = sections[0]["id"].as_i64().unwrap();
    delete(app.clone(), &format!("/api/v1/sections/{hero_id}")).await;

    let stats = add_section(&app, project_id, "stats").await;
    let gallery = add_section(&app, project_id, "gallery").await;
    assert_eq!(stats["sort_order"], 0);
    assert_eq!(gallery["sort_order"], 1);

    let listed = body_json(get(app, &format!("/api/v1/projects/{project_id}/sections")).await)
        .await["data"]
        .clone();
    let kinds: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["stats", "gallery"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn adding_unknown_kind_succeeds_with_empty_config(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Odd").await;
    let project_id = project["id"].as_i64().unwrap();

    let section = add_section(&app, project_id, "testimonials").await;
    assert_eq!(section["kind"], "testimonials");
    assert_eq!(section["label"], "Testimonials Section");
    assert_eq!(section["config"], json!({}));

    // It renders as a visible placeholder naming the unknown kind.
    let preview = body_json(get(app, &format!("/api/v1/projects/{project_id}/preview")).await)
        .await["data"]
        .clone();
    let placeholder = preview
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["kind"] == "unknown")
        .expect("unknown section must render a placeholder");
    assert_eq!(placeholder["unknown_kind"], "testimonials");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn toggle_visibility_twice_restores_original_state(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Blink").await;
    let project_id = project["id"].as_i64().unwrap();
    let section = add_section(&app, project_id, "text").await;
    let section_id = section["id"].as_i64().unwrap();
    assert_eq!(section["is_visible"], true);

    let uri = format!("/api/v1/sections/{section_id}/toggle-visibility");
    let hidden = body_json(post_empty(app.clone(), &uri).await).await["data"].clone();
    assert_eq!(hidden["is_visible"], false);

    let shown = body_json(post_empty(app, &uri).await).await["data"].clone();
    assert_eq!(shown["is_visible"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn toggle_visibility_missing_section_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/v1/sections/424242/toggle-visibility").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hidden_sections_are_absent_from_preview(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Peek").await;
    let project_id = project["id"].as_i64().unwrap();
    let section = add_section(&app, project_id, "stats").await;
    let section_id = section["id"].as_i64().unwrap();

    post_empty(
        app.clone(),
        &format!("/api/v1/sections/{section_id}/toggle-visibility"),
    )
    .await;

    let preview = body_json(get(app, &format!("/api/v1/projects/{project_id}/preview")).await)
        .await["data"]
        .clone();
    let kinds: Vec<_> = preview
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["kind"].as_str().unwrap().to_string())
        .collect();
    // Only the seeded hero remains; the hidden stats section is fully
    // absent, not an empty placeholder.
    assert_eq!(kinds, vec!["hero"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_mismatched_config_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Strict").await;
    let project_id = project["id"].as_i64().unwrap();
    let section = add_section(&app, project_id, "gallery").await;
    let section_id = section["id"].as_i64().unwrap();

    // Gallery config missing the required images array.
    let response = patch_json(
        app.clone(),
        &format!("/api/v1/sections/{section_id}"),
        json!({ "config": { "heading": "Broken" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("images"));

    // No partial write occurred.
    let current = body_json(get(app, &format!("/api/v1/sections/{section_id}")).await)
        .await["data"]
        .clone();
    assert_eq!(current["config"], section["config"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_does_not_renumber_remaining_sections(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Gaps").await;
    let project_id = project["id"].as_i64().unwrap();

    let a = add_section(&app, project_id, "stats").await;
    let b = add_section(&app, project_id, "video").await;
    let c = add_section(&app, project_id, "text").await;

    delete(
        app.clone(),
        &format!("/api/v1/sections/{}", b["id"].as_i64().unwrap()),
    )
    .await;

    let listed = body_json(get(app, &format!("/api/v1/projects/{project_id}/sections")).await)
        .await["data"]
        .clone();
    let orders: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["id"].as_i64().unwrap(), s["sort_order"].as_i64().unwrap()))
        .collect();

    // The gap left by the deleted section persists.
    assert!(orders.contains(&(a["id"].as_i64().unwrap(), a["sort_order"].as_i64().unwrap())));
    assert!(orders.contains(&(c["id"].as_i64().unwrap(), c["sort_order"].as_i64().unwrap())));
    assert_eq!(orders.len(), 3); // seeded hero + stats + text
}

#[sqlx::test(migrations = "../db/migrations")]
async fn gallery_preview_clamps_out_of_range_columns(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Wide").await;
    let project_id = project["id"].as_i64().unwrap();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/sections"),
        json!({
            "kind": "gallery",
            "config": { "heading": "G", "images": [], "columns": 5 }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let preview = body_json(get(app, &format!("/api/v1/projects/{project_id}/preview")).await)
        .await["data"]
        .clone();
    let gallery = preview
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["kind"] == "gallery")
        .unwrap();
    assert_eq!(gallery["columns"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_section_is_unsupported_not_silent(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let project = create_project(&app, "Twin").await;
    let project_id = project["id"].as_i64().unwrap();
    let section = add_section(&app, project_id, "text").await;
    let section_id = section["id"].as_i64().unwrap();

    let response = post_empty(app, &format!("/api/v1/sections/{section_id}/duplicate")).await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNSUPPORTED");
}
