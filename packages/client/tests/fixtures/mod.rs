//! In-process mock of the booking backend.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use nomad_client::{ApiClient, ApiConfig, ApiService};
use tokio::{net::TcpListener, task::JoinHandle};

/// A request as seen by the mock backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
}

#[derive(Default)]
struct BackendState {
    stubs: HashMap<(Method, String), (StatusCode, String)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for canned responses keyed by method and path.
#[derive(Default)]
pub struct MockBackendBuilder {
    stubs: HashMap<(Method, String), (StatusCode, String)>,
}

impl MockBackendBuilder {
    pub fn stub(mut self, method: Method, path: &str, status: StatusCode, body: &str) -> Self {
        self.stubs
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    pub async fn start(self) -> MockBackend {
        let state = Arc::new(BackendState {
            stubs: self.stubs,
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .fallback(respond)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock backend failed");
        });

        MockBackend {
            addr,
            state,
            handle,
        }
    }
}

pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
    handle: JoinHandle<()>,
}

impl MockBackend {
    pub fn builder() -> MockBackendBuilder {
        MockBackendBuilder::default()
    }

    /// Base URL including a team path prefix, like the real backend.
    pub fn base_url(&self) -> String {
        format!("http://{}/team-7", self.addr)
    }

    pub fn service(&self) -> ApiService {
        let config = ApiConfig::new(self.base_url().parse().expect("Invalid base URL"))
            .expect("Invalid API config");
        ApiService::new(ApiClient::new(config).expect("Failed to build client"))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("Poisoned").clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(State(state): State<Arc<BackendState>>, method: Method, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state
        .requests
        .lock()
        .expect("Poisoned")
        .push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            query: uri.query().map(str::to_string),
        });

    match state.stubs.get(&(method, path)) {
        Some((status, body)) => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"message":"존재하지 않는 경로입니다."}"#.to_string(),
        )
            .into_response(),
    }
}

/// Port with nothing listening on it.
pub async fn closed_port_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local addr");
    drop(listener);
    format!("http://{addr}")
}

pub const ACTIVITY_JSON: &str = r#"{
    "id": 42,
    "userId": 21,
    "title": "함께 배우면 즐거운 스트릿댄스",
    "description": "둠칫 둠칫 두둠칫",
    "category": "투어",
    "price": 10000,
    "address": "서울특별시 강남구 테헤란로 427",
    "bannerImageUrl": "https://example.com/banner.png",
    "rating": 4.7,
    "reviewCount": 5,
    "createdAt": "2023-12-14T07:31:03.174Z",
    "updatedAt": "2023-12-14T07:31:03.174Z"
}"#;

pub const REVIEWS_JSON: &str = r#"{
    "averageRating": 4.5,
    "totalCount": 1,
    "reviews": [{
        "id": 1,
        "user": { "id": 3, "nickname": "dancer", "profileImageUrl": null },
        "activityId": 5,
        "rating": 5,
        "content": "최고였어요",
        "createdAt": "2024-01-02T03:04:05.000Z",
        "updatedAt": "2024-01-02T03:04:05.000Z"
    }]
}"#;

pub const NOTIFICATIONS_JSON: &str = r#"{
    "cursorId": 9,
    "totalCount": 1,
    "notifications": [{
        "id": 9,
        "teamId": "7",
        "userId": 21,
        "content": "함께하면 즐거운 스트릿 댄스(2023-01-14 15:00~18:00) 예약이 승인되었어요.",
        "createdAt": "2024-01-02T03:04:05.000Z",
        "updatedAt": "2024-01-02T03:04:05.000Z",
        "deletedAt": null
    }]
}"#;
