pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user/profile                     profile (GET)
/// /user/themes                      owned themes (GET)
/// /user/favorites                   favorites list (GET), add (POST)
/// /user/favorites/{theme_id}        remove (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/user", user::router())
}
