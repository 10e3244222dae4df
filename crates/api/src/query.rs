//! Shared query parameter types for API handlers.

use serde::Deserialize;
use themery_core::types::DbId;

/// The optional `?userId=` parameter accepted by every user-scoped read
/// endpoint. Absent means "the calling user".
#[derive(Debug, Deserialize)]
pub struct UserScopeParams {
    #[serde(rename = "userId")]
    pub user_id: Option<DbId>,
}
