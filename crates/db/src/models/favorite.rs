//! Favorite-theme join entity model.

use serde::Serialize;
use sqlx::FromRow;
use themery_core::types::{DbId, Timestamp};

/// A row from the `favorite_themes` table.
///
/// The row carries its own surrogate id; uniqueness of the (user, theme)
/// pair is enforced by the `uq_favorite_themes_user_theme` constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoriteTheme {
    pub id: DbId,
    pub user_id: DbId,
    pub theme_id: DbId,
    pub created_at: Timestamp,
}

/// A favorite row joined with its theme, as returned by the
/// list-favorites query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavoriteThemeWithTheme {
    /// Favorite row id.
    pub id: DbId,
    pub user_id: DbId,
    pub theme_id: DbId,
    /// When the theme was favorited.
    pub created_at: Timestamp,
    pub theme_name: String,
    pub theme_description: Option<String>,
    /// The theme's owning user.
    pub theme_owner_id: DbId,
    pub favorites_count: i32,
}
