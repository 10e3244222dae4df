//! Theme entity model.

use serde::Serialize;
use sqlx::FromRow;
use themery_core::types::{DbId, Timestamp};

/// A row from the `themes` table.
///
/// `favorites_count` is maintained transactionally by the favorite
/// mutations and always matches the number of `favorite_themes` rows
/// referencing this theme.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    /// Owning user.
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub favorites_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
