//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-step mutations open their
//! own transaction and commit only on full completion; any early return or
//! error drops the transaction, which rolls it back.

pub mod favorite_repo;
pub mod theme_repo;
pub mod user_repo;

pub use favorite_repo::{AddFavorite, FavoriteThemeRepo, RemoveFavorite};
pub use theme_repo::ThemeRepo;
pub use user_repo::UserRepo;
