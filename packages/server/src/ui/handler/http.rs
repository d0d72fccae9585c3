//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};
use nomad_client::domain::{
    Activity, ActivityId, ActivityList, ActivityListQuery, NotificationResponse, ReservationList,
    ReservationListQuery, ReviewList,
};
use nomad_shared::time::now_jst_rfc3339;

use super::error::ApiError;
use crate::ui::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok", "time": now_jst_rfc3339()}))
}

/// Get list of activities
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ActivityListQuery>, QueryRejection>,
) -> Result<Json<ActivityList>, ApiError> {
    let Query(query) = query?;
    let list = state.api.list_activities(&query).await?;
    Ok(Json(list))
}

/// Get activity detail by ID
pub async fn get_activity_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let id: ActivityId = id.parse()?;
    let activity = state.api.get_activity_detail(id).await?;
    Ok(Json(activity))
}

/// Get reviews of an activity
pub async fn get_activity_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ReviewList>, ApiError> {
    let id: ActivityId = id.parse()?;
    let reviews = state.api.get_activity_reviews(id).await?;
    Ok(Json(reviews))
}

/// Delete one of the signed-in user's activities.
///
/// Responds with the upstream status and body.
pub async fn delete_my_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id: ActivityId = id.parse()?;
    let upstream = state.api.delete_my_activity(id).await?;
    tracing::info!("Activity {} deleted ({})", id, upstream.status);

    let status = upstream.status;
    if upstream.body.is_empty() {
        return Ok(status.into_response());
    }
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}

/// Get notifications of the signed-in user
pub async fn get_my_notifications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NotificationResponse>, ApiError> {
    let notifications = state.api.get_my_notifications().await?;
    Ok(Json(notifications))
}

/// Get reservations of the signed-in user
pub async fn get_my_reservations(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ReservationListQuery>, QueryRejection>,
) -> Result<Json<ReservationList>, ApiError> {
    let Query(query) = query?;
    let reservations = state.api.get_my_reservations(&query).await?;
    Ok(Json(reservations))
}
