//! Shared response envelope types for API handlers.
//!
//! All successful API responses use a `{ "status": ..., "data": ...,
//! "message": ... }` envelope. Use [`ApiResponse`] instead of ad-hoc
//! `serde_json::json!` blocks to get compile-time type safety and
//! consistent serialization. Error responses carry `{ "status", "message" }`
//! and are produced by `AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(ApiResponse::new(StatusCode::OK, themes, "User themes fetched successfully."))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            status: status.as_u16(),
            data,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
