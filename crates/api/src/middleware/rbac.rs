//! Authorization extractors and checks.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use themery_core::access::user_scope_permits;
use themery_core::error::CoreError;
use themery_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}

/// Reject with 403 unless the caller may access data scoped to `target`.
///
/// The response is always the same 403 so a caller cannot distinguish
/// "user exists but is not yours" from "user does not exist".
pub fn ensure_user_scope(user: &AuthUser, target: Option<DbId>) -> Result<(), AppError> {
    if user_scope_permits(user.user_id, &user.role, target) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Unauthorized access".into(),
        )))
    }
}
