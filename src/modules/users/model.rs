//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`UserRole`] - role tag stored on the `users.role` column
//! - [`Profile`] - name and email subset returned by the profile endpoint
//!
//! # Request DTOs
//!
//! - [`SignupDto`] - register a new account
//! - [`LoginDto`] - exchange credentials for a bearer token
//! - [`UpdateProfileDto`] - rename the signed-in account
//!
//! Password policy is deliberately not a derive rule: blank fields and
//! policy violations produce different client messages, so the policy
//! check lives in the service layer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::not_blank;

/// Account role.
///
/// Stored as plain text (`USER` / `COACH`) rather than a database enum,
/// so the wire value and the column value are the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "VARCHAR", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Coach,
}

/// DTO for registering a new account.
///
/// Only presence is checked for `email`; the format is not validated.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct SignupDto {
    #[validate(custom(function = not_blank))]
    #[schema(example = "Amy")]
    pub name: String,
    #[validate(custom(function = not_blank))]
    #[schema(example = "amy@example.com")]
    pub email: String,
    #[validate(custom(function = not_blank))]
    #[schema(example = "Password123")]
    pub password: String,
}

/// DTO for logging in.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(custom(function = not_blank))]
    #[schema(example = "amy@example.com")]
    pub email: String,
    #[validate(custom(function = not_blank))]
    #[schema(example = "Password123")]
    pub password: String,
}

/// DTO for updating the signed-in account's display name.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(custom(function = not_blank))]
    #[schema(example = "Amy")]
    pub name: String,
}

/// Subset of the user row returned after signup.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CreatedUser {
    pub id: Uuid,
    pub name: String,
}

/// Payload for the signup response.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub user: CreatedUser,
}

/// Display-name-only subset, used wherever a response nests a `user`
/// object carrying just the name.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct UserName {
    pub name: String,
}

/// Payload for the login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserName,
}

/// Payload for the profile update response.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub user: UserName,
}

/// Name and email subset returned by the profile endpoint.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

/// Name and role pair, used where a user appears inside a larger payload
/// such as the coach detail response.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct UserWithRole {
    pub name: String,
    pub role: UserRole,
}
