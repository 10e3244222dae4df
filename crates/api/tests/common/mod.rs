//! Shared helpers for API integration tests.
//!
//! Builds the application router through the same [`build_app_router`] the
//! binary uses, so every test exercises the production middleware stack.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use themery_api::auth::jwt::{generate_access_token, JwtConfig};
use themery_api::config::ServerConfig;
use themery_api::router::build_app_router;
use themery_api::state::AppState;

/// Fixed signing secret for tests.
const TEST_JWT_SECRET: &str = "integration-test-secret-do-not-use-in-prod";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
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

/// Mint a valid access token for the given user.
pub fn token_for(user_id: i64, role: &str) -> String {
    let config = test_config();
    generate_access_token(user_id, role, &config.jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a user row, returning its id.
pub async fn seed_user(pool: &PgPool, username: &str, role: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash, role) \
         VALUES ($1, $2, 'not-a-real-hash', $3) RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("user insert should succeed")
}

/// Insert a theme row owned by `owner_id`, returning its id.
pub async fn seed_theme(pool: &PgPool, owner_id: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO themes (user_id, name) VALUES ($1, $2) RETURNING id")
        .bind(owner_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("theme insert should succeed")
}

/// Read a theme's current favorites counter.
pub async fn favorites_count(pool: &PgPool, theme_id: i64) -> i32 {
    sqlx::query_scalar("SELECT favorites_count FROM themes WHERE id = $1")
        .bind(theme_id)
        .fetch_one(pool)
        .await
        .expect("theme should exist")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with an optional Bearer token and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET with a Bearer token.
pub async fn get(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, path, Some(token), None).await
}

/// GET without any Authorization header.
pub async fn get_anonymous(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

/// POST a JSON body with a Bearer token.
pub async fn post_json(app: Router, path: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, path, Some(token), Some(body)).await
}

/// DELETE with a Bearer token.
pub async fn delete(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, path, Some(token), None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Assert the standard error envelope: `{ "status": ..., "message": ... }`.
pub async fn assert_error_envelope(response: Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected);
    let json = body_json(response).await;
    assert_eq!(json["status"], expected.as_u16());
    assert!(json["message"].is_string());
}
