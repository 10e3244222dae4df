//! Route definitions for the user-scoped resources, mounted at `/user`.
//!
//! ```text
//! GET    /profile                -> get_user_profile
//! GET    /themes                 -> list_user_themes
//! GET    /favorites              -> list_user_favorite_themes
//! POST   /favorites              -> add_user_favorite_theme
//! DELETE /favorites/{theme_id}   -> remove_user_favorite_theme
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{favorites, themes, users};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(users::get_user_profile))
        .route("/themes", get(themes::list_user_themes))
        .route(
            "/favorites",
            get(favorites::list_user_favorite_themes).post(favorites::add_user_favorite_theme),
        )
        .route(
            "/favorites/{theme_id}",
            delete(favorites::remove_user_favorite_theme),
        )
}
