use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and loads the user it
/// belongs to. A token for a deleted account is rejected the same way
/// a forged one is.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Middleware layers and handler extractors share one lookup.
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("未登入"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("未登入"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        let user =
            sqlx::query_as::<_, CurrentUser>("SELECT id, name, email, role FROM users WHERE id = $1")
                .bind(claims.id)
                .fetch_optional(&state.db)
                .await?
                .ok_or_else(|| AppError::unauthorized("無效的 token"))?;

        parts.extensions.insert(user.clone());

        Ok(user)
    }
}
