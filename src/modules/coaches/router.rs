use crate::modules::coaches::controller::{get_coach, get_coaches};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_coaches_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_coaches))
        .route("/{coach_id}", get(get_coach))
}
