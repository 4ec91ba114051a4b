//! Role gate for the admin course routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that only lets authenticated coaches through.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/courses", post(create_course))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_coach));
/// ```
pub async fn require_coach(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user = CurrentUser::from_request_parts(&mut parts, &state).await?;

    if user.role != UserRole::Coach {
        return Err(AppError::forbidden("使用者尚未成為教練"));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
