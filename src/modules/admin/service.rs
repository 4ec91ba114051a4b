use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::coaches::model::Coach;
use crate::modules::users::model::{UserRole, UserWithRole};
use crate::utils::errors::AppError;
use crate::utils::validation::parse_uuid;

use super::model::{
    ChangeRoleDto, ChangeRoleResponse, Course, CourseResponse, CreateCourseDto, EditCourseDto,
};

pub struct AdminService;

impl AdminService {
    #[instrument]
    pub async fn create_course(
        db: &PgPool,
        dto: CreateCourseDto,
    ) -> Result<CourseResponse, AppError> {
        let user_id = Self::require_uuid(&dto.user_id)?;
        let skill_id = Self::require_uuid(&dto.skill_id)?;

        let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::bad_request("使用者不存在"))?;

        if role != UserRole::Coach {
            return Err(AppError::bad_request("使用者尚未成為教練"));
        }

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses
                 (user_id, skill_id, name, description, start_at, end_at,
                  max_participants, meeting_url)
             VALUES ($1, $2, $3, $4, $5::timestamptz, $6::timestamptz, $7, $8)
             RETURNING *",
        )
        .bind(user_id)
        .bind(skill_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.start_at)
        .bind(&dto.end_at)
        .bind(dto.max_participants)
        .bind(&dto.meeting_url)
        .fetch_one(db)
        .await?;

        tracing::info!(course_id = %course.id, "course created");

        Ok(CourseResponse { course })
    }

    #[instrument]
    pub async fn edit_course(
        db: &PgPool,
        course_id: Uuid,
        dto: EditCourseDto,
    ) -> Result<CourseResponse, AppError> {
        let skill_id = Self::require_uuid(&dto.skill_id)?;

        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?;

        if existing.is_none() {
            return Err(AppError::bad_request("課程不存在"));
        }

        let result = sqlx::query(
            "UPDATE courses
             SET skill_id = $1, name = $2, description = $3,
                 start_at = $4::timestamptz, end_at = $5::timestamptz,
                 max_participants = $6, meeting_url = $7, updated_at = NOW()
             WHERE id = $8",
        )
        .bind(skill_id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.start_at)
        .bind(&dto.end_at)
        .bind(dto.max_participants)
        .bind(&dto.meeting_url)
        .bind(course_id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::bad_request("更新課程失敗"));
        }

        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_one(db)
            .await?;

        Ok(CourseResponse { course })
    }

    #[instrument]
    pub async fn change_role(
        db: &PgPool,
        user_id: Uuid,
        dto: ChangeRoleDto,
    ) -> Result<ChangeRoleResponse, AppError> {
        let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::bad_request("使用者不存在"))?;

        if role == UserRole::Coach {
            return Err(AppError::conflict("使用者已經是教練"));
        }

        let updated = sqlx::query("UPDATE users SET role = $1, updated_at = NOW() WHERE id = $2")
            .bind(UserRole::Coach)
            .bind(user_id)
            .execute(db)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::bad_request("更新使用者失敗"));
        }

        let coach = sqlx::query_as::<_, Coach>(
            "INSERT INTO coaches (user_id, experience_years, description, profile_image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(user_id)
        .bind(dto.experience_years)
        .bind(&dto.description)
        .bind(&dto.profile_image_url)
        .fetch_one(db)
        .await?;

        let user = sqlx::query_as::<_, UserWithRole>("SELECT name, role FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(db)
            .await?;

        tracing::info!(%user_id, coach_id = %coach.id, "user promoted to coach");

        Ok(ChangeRoleResponse { user, coach })
    }

    /// DTO validation already enforces the canonical form.
    fn require_uuid(value: &str) -> Result<Uuid, AppError> {
        parse_uuid(value).ok_or_else(|| AppError::bad_request("欄位未填寫正確"))
    }
}
