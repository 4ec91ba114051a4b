use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::model::{
    ChangeRoleDto, ChangeRoleResponse, Course, CourseResponse, CreateCourseDto, EditCourseDto,
};
use crate::modules::coaches::model::{Coach, CoachDetail, CoachListItem};
use crate::modules::users::model::{
    CreatedUser, LoginDto, LoginResponse, Profile, SignupDto, SignupResponse, UpdateProfileDto,
    UpdateProfileResponse, UserName, UserRole, UserWithRole,
};
use crate::utils::response::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::signup,
        crate::modules::users::controller::login,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_profile,
        crate::modules::admin::controller::create_course,
        crate::modules::admin::controller::edit_course,
        crate::modules::admin::controller::change_role,
        crate::modules::coaches::controller::get_coaches,
        crate::modules::coaches::controller::get_coach,
    ),
    components(
        schemas(
            UserRole,
            SignupDto,
            SignupResponse,
            CreatedUser,
            LoginDto,
            LoginResponse,
            UserName,
            Profile,
            UpdateProfileDto,
            UpdateProfileResponse,
            UserWithRole,
            Course,
            CreateCourseDto,
            EditCourseDto,
            CourseResponse,
            ChangeRoleDto,
            ChangeRoleResponse,
            Coach,
            CoachListItem,
            CoachDetail,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Signup, login and profile endpoints"),
        (name = "Admin", description = "Coach promotion and course management"),
        (name = "Coaches", description = "Public coach directory")
    ),
    info(
        title = "FitCoach API",
        version = "0.1.0",
        description = "A coaching platform REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
