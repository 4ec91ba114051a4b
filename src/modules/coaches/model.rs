//! Coach profile entity and the public read-side payloads.

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::users::model::UserWithRole;

/// A coach profile row. `id` is the coach profile id, distinct from the
/// owning user's id.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Coach {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// One row of the public coach list.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CoachListItem {
    /// Coach profile id, usable with the detail endpoint.
    pub id: Uuid,
    /// Display name of the owning user.
    pub name: String,
}

/// Payload for the coach detail endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoachDetail {
    pub user: UserWithRole,
    pub coach: Coach,
}
