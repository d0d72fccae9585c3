//! `BookingApi` over HTTP.

use async_trait::async_trait;

use super::{api_client::ApiClient, endpoint::Endpoint};
use crate::{
    domain::{
        Activity, ActivityId, ActivityList, ActivityListQuery, BookingApi, NotificationResponse,
        ReservationList, ReservationListQuery, ReviewList,
    },
    error::{RawResponse, ServiceError},
};

const LIST_ACTIVITIES: &str = "fetch activities";
const GET_ACTIVITY_DETAIL: &str = "fetch activity detail";
const GET_ACTIVITY_REVIEWS: &str = "fetch activity reviews";
const DELETE_MY_ACTIVITY: &str = "delete activity";
const GET_MY_NOTIFICATIONS: &str = "fetch notifications";
const GET_MY_RESERVATIONS: &str = "fetch reservations";

/// Service functions backed by one shared `ApiClient`.
#[derive(Debug, Clone)]
pub struct ApiService {
    client: ApiClient,
}

impl ApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl BookingApi for ApiService {
    async fn list_activities(
        &self,
        query: &ActivityListQuery,
    ) -> Result<ActivityList, ServiceError> {
        self.client
            .get_json_with_query(&Endpoint::Activities, query, LIST_ACTIVITIES)
            .await
    }

    async fn get_activity_detail(&self, id: ActivityId) -> Result<Activity, ServiceError> {
        self.client
            .get_json(&Endpoint::ActivityDetail(id), GET_ACTIVITY_DETAIL)
            .await
    }

    async fn get_activity_reviews(&self, id: ActivityId) -> Result<ReviewList, ServiceError> {
        self.client
            .get_json(&Endpoint::ActivityReviews(id), GET_ACTIVITY_REVIEWS)
            .await
    }

    async fn delete_my_activity(&self, id: ActivityId) -> Result<RawResponse, ServiceError> {
        let response = self
            .client
            .delete(&Endpoint::MyActivityDetail(id), DELETE_MY_ACTIVITY)
            .await?;
        tracing::debug!(
            "Deleted activity {}: status={}, body_len={}",
            id,
            response.status,
            response.body.len()
        );
        Ok(response)
    }

    async fn get_my_notifications(&self) -> Result<NotificationResponse, ServiceError> {
        self.client
            .get_json(&Endpoint::MyNotifications, GET_MY_NOTIFICATIONS)
            .await
    }

    async fn get_my_reservations(
        &self,
        query: &ReservationListQuery,
    ) -> Result<ReservationList, ServiceError> {
        if query.is_empty() {
            return self
                .client
                .get_json(&Endpoint::MyReservations, GET_MY_RESERVATIONS)
                .await;
        }
        self.client
            .get_json_with_query(&Endpoint::MyReservations, query, GET_MY_RESERVATIONS)
            .await
    }
}
