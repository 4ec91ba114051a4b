use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::middleware::auth::CurrentUser;
use crate::modules::admin::model::{
    ChangeRoleDto, ChangeRoleResponse, CourseResponse, CreateCourseDto, EditCourseDto,
};
use crate::modules::admin::service::AdminService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::{success, ApiResponse, ErrorResponse};
use crate::utils::validation::parse_uuid;
use crate::validator::ValidatedJson;

/// Create a course for a coach
#[utoipa::path(
    post,
    path = "/api/admin/coaches/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseResponse>),
        (status = 400, description = "Invalid fields or the target user is not a coach", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not a coach", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument]
pub async fn create_course(
    State(state): State<AppState>,
    _user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), AppError> {
    let data = AdminService::create_course(&state.db, dto).await?;
    Ok(success(StatusCode::CREATED, data))
}

/// Replace every field of an existing course
#[utoipa::path(
    put,
    path = "/api/admin/coaches/courses/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course to edit")
    ),
    request_body = EditCourseDto,
    responses(
        (status = 200, description = "Course updated", body = ApiResponse<CourseResponse>),
        (status = 400, description = "Invalid fields or unknown course", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Caller is not a coach", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument]
pub async fn edit_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    _user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<EditCourseDto>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), AppError> {
    let course_id =
        parse_uuid(&course_id).ok_or_else(|| AppError::bad_request("欄位未填寫正確"))?;
    let data = AdminService::edit_course(&state.db, course_id, dto).await?;
    Ok(success(StatusCode::OK, data))
}

/// Promote a user to coach
#[utoipa::path(
    post,
    path = "/api/admin/coaches/{user_id}",
    params(
        ("user_id" = String, Path, description = "User to promote")
    ),
    request_body = ChangeRoleDto,
    responses(
        (status = 201, description = "User promoted", body = ApiResponse<ChangeRoleResponse>),
        (status = 400, description = "Invalid fields or unknown user", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 409, description = "User is already a coach", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument]
pub async fn change_role(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    _user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<ChangeRoleDto>,
) -> Result<(StatusCode, Json<ApiResponse<ChangeRoleResponse>>), AppError> {
    let user_id = parse_uuid(&user_id).ok_or_else(|| AppError::bad_request("欄位未填寫正確"))?;
    let data = AdminService::change_role(&state.db, user_id, dto).await?;
    Ok(success(StatusCode::CREATED, data))
}
