//! Repository for the `favorite_themes` table.
//!
//! The add/remove mutations pair a join-row write with a `favorites_count`
//! adjustment on the theme inside one transaction, so the counter always
//! matches join-row existence at every commit point. Concurrent duplicate
//! adds that race past the in-transaction existence check are stopped by
//! the `uq_favorite_themes_user_theme` unique constraint.

use sqlx::PgPool;
use themery_core::types::DbId;

use crate::models::favorite::{FavoriteTheme, FavoriteThemeWithTheme};

/// Column list for `favorite_themes` queries.
const COLUMNS: &str = "id, user_id, theme_id, created_at";

/// Outcome of an add-favorite transaction.
#[derive(Debug)]
pub enum AddFavorite {
    /// Row inserted and counter incremented.
    Added(FavoriteTheme),
    /// No theme with the requested id exists. Nothing written.
    ThemeMissing,
    /// The (user, theme) pair is already favorited. Nothing written.
    AlreadyFavorited,
}

/// Outcome of a remove-favorite transaction.
#[derive(Debug)]
pub enum RemoveFavorite {
    /// Row deleted and counter decremented.
    Removed,
    /// The (user, theme) pair was not favorited. Nothing written.
    NotFavorited,
}

/// Provides data access for favorite-theme join rows.
pub struct FavoriteThemeRepo;

impl FavoriteThemeRepo {
    /// Find the favorite row for a (user, theme) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        theme_id: DbId,
    ) -> Result<Option<FavoriteTheme>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM favorite_themes WHERE user_id = $1 AND theme_id = $2");
        sqlx::query_as::<_, FavoriteTheme>(&query)
            .bind(user_id)
            .bind(theme_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's favorites joined with their themes, most recently
    /// favorited first.
    pub async fn list_with_themes(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FavoriteThemeWithTheme>, sqlx::Error> {
        sqlx::query_as::<_, FavoriteThemeWithTheme>(
            "SELECT f.id, f.user_id, f.theme_id, f.created_at, \
                    t.name AS theme_name, t.description AS theme_description, \
                    t.user_id AS theme_owner_id, t.favorites_count \
             FROM favorite_themes f \
             JOIN themes t ON t.id = f.theme_id \
             WHERE f.user_id = $1 \
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Favorite a theme for a user.
    ///
    /// Runs the theme lookup, duplicate check, row insert, and counter
    /// increment in a single transaction. Early returns drop the
    /// transaction before commit, so rejected attempts write nothing.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        theme_id: DbId,
    ) -> Result<AddFavorite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let theme_exists: Option<(DbId,)> = sqlx::query_as("SELECT id FROM themes WHERE id = $1")
            .bind(theme_id)
            .fetch_optional(&mut *tx)
            .await?;
        if theme_exists.is_none() {
            return Ok(AddFavorite::ThemeMissing);
        }

        let existing: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM favorite_themes WHERE user_id = $1 AND theme_id = $2",
        )
        .bind(user_id)
        .bind(theme_id)
        .fetch_optional(&mut *tx)
        .await?;
        if existing.is_some() {
            return Ok(AddFavorite::AlreadyFavorited);
        }

        let insert_query = format!(
            "INSERT INTO favorite_themes (user_id, theme_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let favorite = sqlx::query_as::<_, FavoriteTheme>(&insert_query)
            .bind(user_id)
            .bind(theme_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE themes SET favorites_count = favorites_count + 1 WHERE id = $1")
            .bind(theme_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(AddFavorite::Added(favorite))
    }

    /// Unfavorite a theme for a user.
    ///
    /// Runs the existence check, row delete, and counter decrement in a
    /// single transaction. The decrement is floored at zero so the counter
    /// cannot go negative even if it was already out of sync. A theme that
    /// no longer exists is tolerated (zero rows updated).
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        theme_id: DbId,
    ) -> Result<RemoveFavorite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query(
            "DELETE FROM favorite_themes WHERE user_id = $1 AND theme_id = $2",
        )
        .bind(user_id)
        .bind(theme_id)
        .execute(&mut *tx)
        .await?;
        if deleted.rows_affected() == 0 {
            return Ok(RemoveFavorite::NotFavorited);
        }

        sqlx::query(
            "UPDATE themes SET favorites_count = GREATEST(favorites_count - 1, 0) WHERE id = $1",
        )
        .bind(theme_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(RemoveFavorite::Removed)
    }
}
