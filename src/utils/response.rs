use axum::{Json, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

/// Uniform success envelope. Every endpoint wraps its payload in this
/// shape; clients switch on `status` before reading `data`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always the literal `"success"`.
    #[schema(example = "success")]
    pub status: &'static str,
    pub data: T,
}

/// Failure envelope, documented for the API schema. Client errors use
/// `status: "failed"`, masked server errors use `status: "error"`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "failed")]
    pub status: String,
    pub message: String,
}

pub fn success<T: Serialize>(
    status_code: StatusCode,
    data: T,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status_code,
        Json(ApiResponse {
            status: "success",
            data,
        }),
    )
}
