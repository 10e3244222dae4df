//! Handlers for the user profile resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use themery_core::error::CoreError;
use themery_db::models::user::UserResponse;
use themery_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{ensure_user_scope, RequireAuth};
use crate::query::UserScopeParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/user/profile
///
/// Retrieve the calling user's profile. The optional `userId` query
/// parameter is an ownership check only: access requires it to be absent,
/// the caller's own id, or an admin caller. The data returned is always
/// the caller's own row.
pub async fn get_user_profile(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<UserScopeParams>,
) -> AppResult<ApiResponse<UserResponse>> {
    ensure_user_scope(&user, params.user_id)?;

    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    Ok(ApiResponse::new(
        StatusCode::OK,
        record.into(),
        "User data fetched successfully.",
    ))
}
