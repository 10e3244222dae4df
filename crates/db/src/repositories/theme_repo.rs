//! Repository for the `themes` table.
//!
//! Theme creation and deletion are owned by another service; this one reads
//! themes and adjusts `favorites_count` via [`FavoriteThemeRepo`].
//!
//! [`FavoriteThemeRepo`]: crate::repositories::FavoriteThemeRepo

use sqlx::PgPool;
use themery_core::types::DbId;

use crate::models::theme::Theme;

/// Column list for `themes` queries.
const COLUMNS: &str =
    "id, user_id, name, description, favorites_count, created_at, updated_at";

/// Provides read access to themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Find a theme by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE id = $1");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all themes owned by a user, most recently created first.
    pub async fn list_by_owner(pool: &PgPool, user_id: DbId) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM themes \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
