use axum::{
    Router, middleware,
    routing::{post, put},
};

use crate::middleware::role::require_coach;
use crate::modules::admin::controller::{change_role, create_course, edit_course};
use crate::state::AppState;

/// Admin routes. The coach gate covers the course routes only; the
/// promotion route requires authentication but no particular role.
pub fn init_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/courses", post(create_course))
        .route("/courses/{course_id}", put(edit_course))
        .route_layer(middleware::from_fn_with_state(state, require_coach))
        .route("/{user_id}", post(change_role))
}
