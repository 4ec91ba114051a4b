use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validation::is_valid_password;

use super::model::{
    CreatedUser, LoginDto, LoginResponse, Profile, SignupDto, SignupResponse, UpdateProfileDto,
    UpdateProfileResponse, UserName, UserRole,
};

const PASSWORD_RULE: &str = "密碼不符合規則，需要包含英文數字大小寫，最短8個字，最長16個字";

pub struct UserService;

impl UserService {
    #[instrument]
    pub async fn signup(db: &PgPool, dto: SignupDto) -> Result<SignupResponse, AppError> {
        if !is_valid_password(&dto.password) {
            return Err(AppError::bad_request(PASSWORD_RULE));
        }

        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::conflict("Email 已被使用"));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, CreatedUser>(
            "INSERT INTO users (name, email, role, password)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(UserRole::User)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        tracing::info!(user_id = %user.id, "user created");

        Ok(SignupResponse { user })
    }

    #[instrument]
    pub async fn login(
        db: &PgPool,
        dto: LoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: String,
            password: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request("使用者不存在"))?;

        // The stored hash is never compared against a password that
        // breaks the policy.
        if !is_valid_password(&dto.password) {
            return Err(AppError::bad_request(PASSWORD_RULE));
        }

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::bad_request("密碼輸入錯誤"));
        }

        let token = create_token(user.id, jwt_config)?;

        Ok(LoginResponse {
            token,
            user: UserName { name: user.name },
        })
    }

    #[instrument]
    pub async fn get_profile(db: &PgPool, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile =
            sqlx::query_as::<_, Profile>("SELECT name, email FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(db)
                .await?;

        Ok(profile)
    }

    #[instrument]
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<UpdateProfileResponse, AppError> {
        let current = sqlx::query_as::<_, UserName>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(db)
            .await?;

        if current.name == dto.name {
            return Err(AppError::bad_request("使用者名稱未變更"));
        }

        // Guarded write: the old name in the predicate turns a
        // concurrent rename into an affected-count of zero.
        let result = sqlx::query(
            "UPDATE users SET name = $1, updated_at = NOW() WHERE id = $2 AND name = $3",
        )
        .bind(&dto.name)
        .bind(user_id)
        .bind(&current.name)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::bad_request("更新使用者資料失敗"));
        }

        let user = sqlx::query_as::<_, UserName>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(db)
            .await?;

        Ok(UpdateProfileResponse { user })
    }
}
