//! Port to the booking backend.
//!
//! Callers (the BFF handlers, the CLI) depend on this trait; the reqwest
//! implementation lives in the infrastructure layer.

use async_trait::async_trait;

use super::{
    entity::{Activity, ActivityList, NotificationResponse, ReservationList, ReviewList},
    query::{ActivityListQuery, ReservationListQuery},
    value_object::ActivityId,
};
use crate::error::{RawResponse, ServiceError};

/// Operations the backend exposes to this frontend.
///
/// Every method issues exactly one HTTP request and never retries.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `GET /activities`
    async fn list_activities(&self, query: &ActivityListQuery)
    -> Result<ActivityList, ServiceError>;

    /// `GET /activities/{id}`
    async fn get_activity_detail(&self, id: ActivityId) -> Result<Activity, ServiceError>;

    /// `GET /activities/{id}/reviews`
    async fn get_activity_reviews(&self, id: ActivityId) -> Result<ReviewList, ServiceError>;

    /// `DELETE /my-activities/{id}`
    ///
    /// Returns the raw upstream response on success.
    async fn delete_my_activity(&self, id: ActivityId) -> Result<RawResponse, ServiceError>;

    /// `GET /my-notifications`
    async fn get_my_notifications(&self) -> Result<NotificationResponse, ServiceError>;

    /// `GET /my-reservations`
    async fn get_my_reservations(
        &self,
        query: &ReservationListQuery,
    ) -> Result<ReservationList, ServiceError>;
}
