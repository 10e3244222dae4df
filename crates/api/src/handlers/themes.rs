//! Handlers for the user themes resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use themery_db::models::theme::Theme;
use themery_db::repositories::ThemeRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{ensure_user_scope, RequireAuth};
use crate::query::UserScopeParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/user/themes
///
/// List the themes owned by the calling user. Authorization follows the
/// same `userId` ownership gate as the profile endpoint; the query is
/// always scoped to the caller's id. Query failures surface as 500, never
/// as a 403.
pub async fn list_user_themes(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<UserScopeParams>,
) -> AppResult<ApiResponse<Vec<Theme>>> {
    ensure_user_scope(&user, params.user_id)?;

    let themes = ThemeRepo::list_by_owner(&state.pool, user.user_id).await?;

    Ok(ApiResponse::new(
        StatusCode::OK,
        themes,
        "User themes fetched successfully.",
    ))
}
