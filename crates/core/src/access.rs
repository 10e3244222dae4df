//! User-scope authorization predicate.
//!
//! Every user-scoped endpoint accepts an optional `userId` query parameter
//! naming the account whose data is requested. Access is granted when the
//! parameter is absent (implicitly "myself"), when it names the caller's own
//! account, or when the caller is an admin. Everything else is rejected with
//! a single 403 so callers cannot probe which user ids exist.

use crate::roles::ROLE_ADMIN;
use crate::types::DbId;

/// Returns `true` if a caller with the given id and role may access data
/// scoped to `target`. Pure function, no I/O.
pub fn user_scope_permits(caller_id: DbId, caller_role: &str, target: Option<DbId>) -> bool {
    match target {
        None => true,
        Some(id) => id == caller_id || caller_role == ROLE_ADMIN,
    }
}
