#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pagecraft_ai::{AiClient, AiConfig};
use pagecraft_api::config::ServerConfig;
use pagecraft_api::edit_locks::EditLocks;
use pagecraft_api::router::build_app_router;
use pagecraft_api::state::AppState;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and an unconfigured AI client.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack that production uses.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai: Arc::new(AiClient::new(AiConfig::unconfigured())),
        edit_locks: EditLocks::default(),
    };
    build_app_router(state, &config)
}

/// Build the application router with an AI client pointed at `base_url`
/// (normally a [`spawn_completions_stub`] address) and a dummy credential.
pub fn build_test_app_with_ai(pool: SqlitePool, base_url: &str) -> Router {
    let config = test_config();
    let ai_config = AiConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        model: "gpt-4o-mini".to_string(),
        timeout: Duration::from_secs(5),
    };
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai: Arc::new(AiClient::new(ai_config)),
        edit_locks: EditLocks::default(),
    };
    build_app_router(state, &config)
}

/// Spawn a canned chat-completions endpoint on an ephemeral local port,
/// returning its base URL. Every request is answered with `content` as
/// the assistant message, mimicking the provider's response envelope.
pub async fn spawn_completions_stub(content: &str) -> String {
    let body = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    });
    let stub = Router::new().route(
        "/chat/completions",
        axum::routing::post(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body is not JSON: {e}: {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Create a project through the API and return its JSON representation.
pub async fn create_project(app: &Router, name: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/v1/projects",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Add a section of `kind` to a project through the API, returning the
/// section's JSON representation.
pub async fn add_section(app: &Router, project_id: i64, kind: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/sections"),
        serde_json::json!({ "kind": kind }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
