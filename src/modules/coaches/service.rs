use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{UserRole, UserWithRole};
use crate::utils::errors::AppError;
use crate::utils::pagination::Page;

use super::model::{Coach, CoachDetail, CoachListItem};

pub struct CoachService;

impl CoachService {
    #[instrument]
    pub async fn get_list(db: &PgPool, page: Page) -> Result<Vec<CoachListItem>, AppError> {
        let coaches = sqlx::query_as::<_, CoachListItem>(
            "SELECT coaches.id, users.name
             FROM coaches
             JOIN users ON users.id = coaches.user_id
             ORDER BY coaches.created_at DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(db)
        .await?;

        Ok(coaches)
    }

    #[instrument]
    pub async fn get_detail(db: &PgPool, coach_id: Uuid) -> Result<CoachDetail, AppError> {
        #[derive(sqlx::FromRow)]
        struct CoachWithUser {
            id: Uuid,
            user_id: Uuid,
            experience_years: i32,
            description: String,
            profile_image_url: Option<String>,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
            name: String,
            role: UserRole,
        }

        let row = sqlx::query_as::<_, CoachWithUser>(
            "SELECT coaches.id, coaches.user_id, coaches.experience_years,
                    coaches.description, coaches.profile_image_url,
                    coaches.created_at, coaches.updated_at,
                    users.name, users.role
             FROM coaches
             JOIN users ON users.id = coaches.user_id
             WHERE coaches.id = $1",
        )
        .bind(coach_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request("找不到該教練"))?;

        Ok(CoachDetail {
            user: UserWithRole {
                name: row.name,
                role: row.role,
            },
            coach: Coach {
                id: row.id,
                user_id: row.user_id,
                experience_years: row.experience_years,
                description: row.description,
                profile_image_url: row.profile_image_url,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        })
    }
}
