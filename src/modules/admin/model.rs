//! Course entity and the admin-side request DTOs.
//!
//! UUID-valued body fields arrive as strings and are checked for the
//! canonical hyphenated form before the service converts them, matching
//! the path-parameter treatment. `start_at` / `end_at` stay strings all
//! the way to the database, which casts them to `timestamptz`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::coaches::model::Coach;
use crate::modules::users::model::UserWithRole;
use crate::utils::validation::{https_url, not_blank, optional_https_url, uuid_string};

/// A course row.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_id: Uuid,
    pub name: String,
    pub description: String,
    pub start_at: chrono::DateTime<chrono::Utc>,
    pub end_at: chrono::DateTime<chrono::Utc>,
    pub max_participants: i32,
    pub meeting_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a course on behalf of a coach.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCourseDto {
    /// Owning coach's user id.
    #[validate(custom(function = uuid_string))]
    pub user_id: String,
    #[validate(custom(function = uuid_string))]
    pub skill_id: String,
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(custom(function = not_blank))]
    pub description: String,
    #[validate(custom(function = not_blank))]
    #[schema(example = "2025-01-01 16:00:00")]
    pub start_at: String,
    #[validate(custom(function = not_blank))]
    #[schema(example = "2025-01-01 18:00:00")]
    pub end_at: String,
    #[validate(range(min = 0))]
    pub max_participants: i32,
    #[validate(custom(function = https_url))]
    pub meeting_url: String,
}

/// DTO for editing an existing course. Every field is replaced.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct EditCourseDto {
    #[validate(custom(function = uuid_string))]
    pub skill_id: String,
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(custom(function = not_blank))]
    pub description: String,
    #[validate(custom(function = not_blank))]
    #[schema(example = "2025-01-01 16:00:00")]
    pub start_at: String,
    #[validate(custom(function = not_blank))]
    #[schema(example = "2025-01-01 18:00:00")]
    pub end_at: String,
    #[validate(range(min = 0))]
    pub max_participants: i32,
    #[validate(custom(function = https_url))]
    pub meeting_url: String,
}

/// DTO for promoting a user to coach.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct ChangeRoleDto {
    #[validate(range(min = 0))]
    pub experience_years: i32,
    #[validate(custom(function = not_blank))]
    pub description: String,
    /// May be absent or blank; a non-blank value must start with `https`.
    #[validate(custom(function = optional_https_url))]
    pub profile_image_url: Option<String>,
}

/// Payload wrapping a single course.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course: Course,
}

/// Payload for a successful promotion.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChangeRoleResponse {
    pub user: UserWithRole,
    pub coach: Coach,
}
