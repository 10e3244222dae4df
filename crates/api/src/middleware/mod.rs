//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.
//! - [`rbac::ensure_user_scope`] -- Ownership-or-admin check for `userId`-scoped requests.

pub mod auth;
pub mod rbac;
