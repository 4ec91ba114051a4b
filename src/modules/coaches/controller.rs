use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::modules::coaches::model::{CoachDetail, CoachListItem};
use crate::modules::coaches::service::CoachService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PageQuery;
use crate::utils::response::{success, ApiResponse, ErrorResponse};
use crate::utils::validation::parse_uuid;

/// List coaches, newest profile first
#[utoipa::path(
    get,
    path = "/api/coaches",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of coaches", body = ApiResponse<Vec<CoachListItem>>),
        (status = 400, description = "Missing or invalid paging parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Coaches"
)]
#[instrument]
pub async fn get_coaches(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<CoachListItem>>>), AppError> {
    let page = query.parse()?;
    let data = CoachService::get_list(&state.db, page).await?;
    Ok(success(StatusCode::OK, data))
}

/// Get one coach's public profile
#[utoipa::path(
    get,
    path = "/api/coaches/{coach_id}",
    params(
        ("coach_id" = String, Path, description = "Coach profile id")
    ),
    responses(
        (status = 200, description = "Coach profile with the owning user", body = ApiResponse<CoachDetail>),
        (status = 400, description = "Invalid id or unknown coach", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Coaches"
)]
#[instrument]
pub async fn get_coach(
    State(state): State<AppState>,
    Path(coach_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<CoachDetail>>), AppError> {
    let coach_id = parse_uuid(&coach_id).ok_or_else(|| AppError::bad_request("欄位未填寫正確"))?;
    let data = CoachService::get_detail(&state.db, coach_id).await?;
    Ok(success(StatusCode::OK, data))
}
