//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;

use super::{handler, state::AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/activities", get(handler::list_activities))
        .route("/api/activities/{id}", get(handler::get_activity_detail))
        .route(
            "/api/activities/{id}/reviews",
            get(handler::get_activity_reviews),
        )
        .route(
            "/api/my-activities/{id}",
            delete(handler::delete_my_activity),
        )
        .route("/api/my-notifications", get(handler::get_my_notifications))
        .route("/api/my-reservations", get(handler::get_my_reservations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
