//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus the serializable response shapes derived from it.

pub mod favorite;
pub mod theme;
pub mod user;
