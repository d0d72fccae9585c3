//! Test fixtures: a mocked backend port and an in-process BFF server.

use std::{net::SocketAddr, sync::Arc};

use async_trait::async_trait;
use mockall::mock;
use nomad_client::{
    BookingApi, RawResponse, ServiceError,
    domain::{
        Activity, ActivityId, ActivityList, ActivityListQuery, NotificationResponse,
        ReservationList, ReservationListQuery, ReviewList,
    },
};
use nomad_server::ui::{AppState, create_router};
use tokio::{net::TcpListener, task::JoinHandle};

mock! {
    pub Booking {}

    #[async_trait]
    impl BookingApi for Booking {
        async fn list_activities(&self, query: &ActivityListQuery) -> Result<ActivityList, ServiceError>;
        async fn get_activity_detail(&self, id: ActivityId) -> Result<Activity, ServiceError>;
        async fn get_activity_reviews(&self, id: ActivityId) -> Result<ReviewList, ServiceError>;
        async fn delete_my_activity(&self, id: ActivityId) -> Result<RawResponse, ServiceError>;
        async fn get_my_notifications(&self) -> Result<NotificationResponse, ServiceError>;
        async fn get_my_reservations(&self, query: &ReservationListQuery) -> Result<ReservationList, ServiceError>;
    }
}

/// BFF server bound to an ephemeral port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(api: MockBooking) -> Self {
        let state = Arc::new(AppState::new(Arc::new(api)));
        let app = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn activity(id: i64) -> Activity {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "userId": 21,
        "title": "함께 배우면 즐거운 스트릿댄스",
        "description": "둠칫 둠칫 두둠칫",
        "category": "투어",
        "price": 10000,
        "address": "서울특별시 강남구 테헤란로 427",
        "bannerImageUrl": "https://example.com/banner.png",
        "rating": 4.7
    }))
    .expect("Invalid activity fixture")
}
