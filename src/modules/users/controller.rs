use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::{
    LoginDto, LoginResponse, Profile, SignupDto, SignupResponse, UpdateProfileDto,
    UpdateProfileResponse,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::{success, ApiResponse, ErrorResponse};
use crate::validator::ValidatedJson;

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/users/signup",
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<SignupResponse>),
        (status = 400, description = "Invalid fields or password rule violation", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupDto>,
) -> Result<(StatusCode, Json<ApiResponse<SignupResponse>>), AppError> {
    let data = UserService::signup(&state.db, dto).await?;
    Ok(success(StatusCode::CREATED, data))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginDto,
    responses(
        (status = 201, description = "Login succeeded", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Unknown account or wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<(StatusCode, Json<ApiResponse<LoginResponse>>), AppError> {
    let data = UserService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(success(StatusCode::CREATED, data))
}

/// Get the signed-in user's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "Name and email of the account", body = ApiResponse<Profile>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument]
pub async fn get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<(StatusCode, Json<ApiResponse<Option<Profile>>>), AppError> {
    let profile = UserService::get_profile(&state.db, user.id).await?;
    Ok(success(StatusCode::OK, profile))
}

/// Rename the signed-in user
#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UpdateProfileResponse>),
        (status = 400, description = "Invalid fields or unchanged name", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument]
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<(StatusCode, Json<ApiResponse<UpdateProfileResponse>>), AppError> {
    let data = UserService::update_profile(&state.db, user.id, dto).await?;
    Ok(success(StatusCode::OK, data))
}
