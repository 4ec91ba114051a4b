//! Shared fixtures for the integration tests.
//!
//! Rows are inserted directly through sqlx so each test controls its own
//! data without going through the HTTP surface.

use chrono::{DateTime, Utc};
use fitcoach::modules::users::model::UserRole;
use fitcoach::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

/// A user created directly in the database.
#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Inserts a user row. The password must satisfy the signup policy so the
/// login endpoint accepts it.
pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    role: UserRole,
) -> TestUser {
    let hashed = hash_password(password).unwrap();
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (name, email, role, password) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Inserts a coach profile with an explicit creation time so list ordering
/// stays deterministic.
#[allow(dead_code)]
pub async fn create_test_coach(pool: &PgPool, user_id: Uuid, created_at: DateTime<Utc>) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO coaches (user_id, experience_years, description, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $4) RETURNING id",
    )
    .bind(user_id)
    .bind(3)
    .bind("資深教練")
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a course owned by the given user.
#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, user_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO courses (user_id, skill_id, name, description, start_at, end_at, max_participants, meeting_url)
         VALUES ($1, $2, $3, $4, $5::timestamptz, $6::timestamptz, $7, $8) RETURNING id",
    )
    .bind(user_id)
    .bind(Uuid::new_v4())
    .bind("瑜伽基礎")
    .bind("適合初學者的課程")
    .bind("2025-01-01 16:00:00")
    .bind("2025-01-01 18:00:00")
    .bind(10)
    .bind("https://meet.example.com/yoga")
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
