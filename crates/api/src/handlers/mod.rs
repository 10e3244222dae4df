//! Request handlers for the user profile and theme-favoriting endpoints.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `themery_db` and map
//! errors via [`AppError`]. Authorization for `userId`-scoped reads goes
//! through [`ensure_user_scope`]; storage failures propagate as 500 instead
//! of being folded into the 403 branch.
//!
//! [`AppError`]: crate::error::AppError
//! [`ensure_user_scope`]: crate::middleware::rbac::ensure_user_scope

pub mod favorites;
pub mod themes;
pub mod users;
