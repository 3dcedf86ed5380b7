#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use musicdb_api::auth::jwt::{generate_access_token, JwtConfig};
use musicdb_api::config::ServerConfig;
use musicdb_api::router::build_app_router;
use musicdb_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Bearer token carrying `musics:write`.
pub fn writer_token() -> String {
    generate_access_token(1, &["musics:read", "musics:write"], &test_config().jwt).unwrap()
}

/// Bearer token without write permission.
pub fn reader_token() -> String {
    generate_access_token(2, &["musics:read"], &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    extra_headers: &[(&str, &str)],
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    for (name, value) in extra_headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send a JSON-typed request whose body is taken verbatim.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    raw_body: &str,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(raw_body.to_owned())).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, &[], None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, token, &[], Some(body)).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    headers: &[(&str, &str)],
    body: serde_json::Value,
) -> Response {
    send(app, Method::PATCH, uri, token, headers, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response {
    send(app, Method::DELETE, uri, token, &[], None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a track through the API and return its JSON `data`.
pub async fn create_music(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let token = writer_token();
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/musics",
        Some(&token),
        body,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
