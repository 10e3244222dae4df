//! Integration tests for the favorite-themes endpoints.
//!
//! Walks the full favorite lifecycle end to end and checks that the
//! `favorites_count` counter stays consistent with join-row existence
//! across every response.

mod common;

use axum::http::StatusCode;
use common::{body_json, favorites_count, seed_theme, seed_user, token_for};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Lifecycle scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn favorite_lifecycle_keeps_count_consistent(pool: PgPool) {
    let alice = seed_user(&pool, "alice", "user").await;
    let bob = seed_user(&pool, "bob", "user").await;
    let theme_id = seed_theme(&pool, bob, "solarized").await;
    let token = token_for(alice, "user");

    // Add: 201, row exists, count = 1.
    let response = common::post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/user/favorites",
        &token,
        json!({ "themeId": theme_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], 201);
    assert_eq!(body["message"], "Added theme to favorites successfully.");
    assert_eq!(favorites_count(&pool, theme_id).await, 1);

    // Duplicate add: 400, count unchanged.
    let response = common::post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/user/favorites",
        &token,
        json!({ "themeId": theme_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Theme already favorited.");
    assert_eq!(favorites_count(&pool, theme_id).await, 1);

    // Remove: 200, row gone, count = 0.
    let response = common::delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/user/favorites/{theme_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(favorites_count(&pool, theme_id).await, 0);

    // Second remove: 404, count unchanged.
    let response = common::delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/user/favorites/{theme_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Favorite theme not found.");
    assert_eq!(favorites_count(&pool, theme_id).await, 0);
}

// ---------------------------------------------------------------------------
// Add edge cases
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_favorite_for_missing_theme_is_404(pool: PgPool) {
    let alice = seed_user(&pool, "alice", "user").await;
    let token = token_for(alice, "user");

    let response = common::post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/user/favorites",
        &token,
        json!({ "themeId": 999_999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Theme not found.");

    // Nothing was written.
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorite_themes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn storage_failure_during_add_is_500_with_no_partial_write(pool: PgPool) {
    // With the counter at int4 max the increment overflows inside the
    // transaction; the handler must answer 500 and the insert that
    // preceded the failure must not be visible afterwards.
    let alice = seed_user(&pool, "alice", "user").await;
    let bob = seed_user(&pool, "bob", "user").await;
    let theme_id = seed_theme(&pool, bob, "solarized").await;
    let token = token_for(alice, "user");

    sqlx::query("UPDATE themes SET favorites_count = 2147483647 WHERE id = $1")
        .bind(theme_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = common::post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/user/favorites",
        &token,
        json!({ "themeId": theme_id }),
    )
    .await;
    common::assert_error_envelope(response, StatusCode::INTERNAL_SERVER_ERROR).await;

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM favorite_themes WHERE user_id = $1 AND theme_id = $2",
    )
    .bind(alice)
    .bind(theme_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(rows, 0);
    assert_eq!(favorites_count(&pool, theme_id).await, 2147483647);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_favorite_requires_authentication(pool: PgPool) {
    let response = common::send(
        common::build_test_app(pool),
        axum::http::Method::POST,
        "/api/v1/user/favorites",
        None,
        Some(json!({ "themeId": 1 })),
    )
    .await;
    common::assert_error_envelope(response, StatusCode::UNAUTHORIZED).await;
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_favorites_includes_theme_data(pool: PgPool) {
    let alice = seed_user(&pool, "alice", "user").await;
    let bob = seed_user(&pool, "bob", "user").await;
    let theme_id = seed_theme(&pool, bob, "solarized").await;
    let token = token_for(alice, "user");

    let response = common::post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/user/favorites",
        &token,
        json!({ "themeId": theme_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = common::get(
        common::build_test_app(pool.clone()),
        "/api/v1/user/favorites",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "User favorite themes fetched successfully.");
    let favorites = json["data"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["theme_id"], theme_id);
    assert_eq!(favorites[0]["theme_name"], "solarized");
    assert_eq!(favorites[0]["theme_owner_id"], bob);
    assert_eq!(favorites[0]["favorites_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_favorites_for_other_user_is_forbidden_for_non_admin(pool: PgPool) {
    let alice = seed_user(&pool, "alice", "user").await;
    let bob = seed_user(&pool, "bob", "user").await;
    let token = token_for(alice, "user");

    let response = common::get(
        common::build_test_app(pool),
        &format!("/api/v1/user/favorites?userId={bob}"),
        &token,
    )
    .await;
    common::assert_error_envelope(response, StatusCode::FORBIDDEN).await;
}
