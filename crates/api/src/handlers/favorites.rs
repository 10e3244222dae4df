//! Handlers for the favorite-themes resource.
//!
//! The add/remove mutations are transactional in the repository layer: the
//! `favorites_count` counter and the join row move together or not at all.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use themery_core::error::CoreError;
use themery_core::types::DbId;
use themery_db::models::favorite::FavoriteThemeWithTheme;
use themery_db::repositories::{AddFavorite, FavoriteThemeRepo, RemoveFavorite};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_user_scope, RequireAuth};
use crate::query::UserScopeParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/user/favorites`.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(rename = "themeId")]
    pub theme_id: DbId,
}

/// GET /api/v1/user/favorites
///
/// List the calling user's favorites, each joined with its theme. Same
/// `userId` ownership gate as the other user-scoped reads.
pub async fn list_user_favorite_themes(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<UserScopeParams>,
) -> AppResult<ApiResponse<Vec<FavoriteThemeWithTheme>>> {
    ensure_user_scope(&user, params.user_id)?;

    let favorites = FavoriteThemeRepo::list_with_themes(&state.pool, user.user_id).await?;

    Ok(ApiResponse::new(
        StatusCode::OK,
        favorites,
        "User favorite themes fetched successfully.",
    ))
}

/// POST /api/v1/user/favorites
///
/// Favorite a theme for the calling user.
///
/// Returns 201 on success, 404 if the theme does not exist, 400 if the
/// theme is already favorited.
pub async fn add_user_favorite_theme(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<AddFavoriteRequest>,
) -> AppResult<ApiResponse<Value>> {
    match FavoriteThemeRepo::add(&state.pool, user.user_id, input.theme_id).await? {
        AddFavorite::Added(favorite) => {
            tracing::info!(
                user_id = user.user_id,
                theme_id = input.theme_id,
                favorite_id = favorite.id,
                "Theme added to favorites",
            );
            Ok(ApiResponse::new(
                StatusCode::CREATED,
                json!({}),
                "Added theme to favorites successfully.",
            ))
        }
        AddFavorite::ThemeMissing => Err(AppError::NotFound("Theme not found.".into())),
        AddFavorite::AlreadyFavorited => Err(AppError::Core(CoreError::Validation(
            "Theme already favorited.".into(),
        ))),
    }
}

/// DELETE /api/v1/user/favorites/{theme_id}
///
/// Unfavorite a theme for the calling user.
///
/// Returns 200 on success, 404 if the theme was not favorited.
pub async fn remove_user_favorite_theme(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<ApiResponse<Value>> {
    match FavoriteThemeRepo::remove(&state.pool, user.user_id, theme_id).await? {
        RemoveFavorite::Removed => {
            tracing::info!(
                user_id = user.user_id,
                theme_id,
                "Theme removed from favorites",
            );
            Ok(ApiResponse::new(
                StatusCode::OK,
                json!({}),
                "Removed theme from favorites successfully.",
            ))
        }
        RemoveFavorite::NotFavorited => {
            Err(AppError::NotFound("Favorite theme not found.".into()))
        }
    }
}
