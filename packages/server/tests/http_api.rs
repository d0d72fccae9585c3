//! HTTP API integration tests.
//!
//! Tests for the BFF endpoints against a mocked backend port.

mod fixtures;

use fixtures::{MockBooking, TestServer, activity};
use mockall::predicate::eq;
use nomad_client::{
    RawResponse, ServiceError,
    domain::{
        ActivityId, ActivityList, Category, NotificationResponse, ReservationList,
        ReservationStatus,
    },
};
use reqwest::StatusCode;

fn activity_id(value: i64) -> ActivityId {
    ActivityId::new(value).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start(MockBooking::new()).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert!(body["time"].as_str().unwrap().ends_with("+09:00"));
}

#[tokio::test]
async fn test_activity_detail_endpoint_success() {
    // テスト項目: /api/activities/{id} がアクティビティ詳細を返す
    // given (前提条件):
    let mut api = MockBooking::new();
    api.expect_get_activity_detail()
        .with(eq(activity_id(42)))
        .times(1)
        .returning(|id| Ok(activity(id.value())));
    let server = TestServer::start(api).await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/activities/42", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["id"], 42);
    assert_eq!(body["userId"], 21);
    assert_eq!(body["category"], "투어");
    assert_eq!(body["bannerImageUrl"], "https://example.com/banner.png");
}

#[tokio::test]
async fn test_activity_detail_endpoint_invalid_id() {
    // テスト項目: 不正な ID は上流を呼ばずに 400 を返す
    // given (前提条件): 上流呼び出しは期待しない
    let server = TestServer::start(MockBooking::new()).await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/activities/abc", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_activity_detail_endpoint_upstream_not_found() {
    // テスト項目: 上流の 404 はステータスとメッセージを保ったまま返す
    // given (前提条件):
    let mut api = MockBooking::new();
    api.expect_get_activity_detail().returning(|_| {
        Err(ServiceError::Status {
            operation: "fetch activity detail",
            status: StatusCode::NOT_FOUND,
            status_text: "Not Found".to_string(),
            message: None,
        })
    });
    let server = TestServer::start(api).await;

    // when (操作):
    let response = reqwest::get(format!("{}/api/activities/7", server.base_url()))
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Failed to fetch activity detail: Not Found");
}

#[tokio::test]
async fn test_activity_reviews_endpoint_upstream_bad_body() {
    // テスト項目: 上流の本文が不正な場合は 502 を返す
    let mut api = MockBooking::new();
    api.expect_get_activity_reviews().returning(|_| {
        Err(ServiceError::Decode {
            operation: "fetch activity reviews",
            source: serde_json::from_str::<u32>("{").unwrap_err(),
        })
    });
    let server = TestServer::start(api).await;

    let response = reqwest::get(format!("{}/api/activities/7/reviews", server.base_url()))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 502);
}

#[tokio::test]
async fn test_delete_my_activity_endpoint() {
    // テスト項目: DELETE /api/my-activities/42 は上流を 1 回だけ呼び、ステータスを転送する
    // given (前提条件):
    let mut api = MockBooking::new();
    api.expect_delete_my_activity()
        .with(eq(activity_id(42)))
        .times(1)
        .returning(|_| {
            Ok(RawResponse {
                status: StatusCode::NO_CONTENT,
                body: String::new(),
            })
        });
    let server = TestServer::start(api).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .delete(format!("{}/api/my-activities/42", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 204);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_my_activity_endpoint_forbidden() {
    // テスト項目: 上流の 403 はメッセージ付きで返す
    let mut api = MockBooking::new();
    api.expect_delete_my_activity().times(1).returning(|_| {
        Err(ServiceError::Status {
            operation: "delete activity",
            status: StatusCode::FORBIDDEN,
            status_text: "Forbidden".to_string(),
            message: Some("본인의 체험만 삭제할 수 있습니다.".to_string()),
        })
    });
    let server = TestServer::start(api).await;

    let response = reqwest::Client::new()
        .delete(format!("{}/api/my-activities/42", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "본인의 체험만 삭제할 수 있습니다.");
}

#[tokio::test]
async fn test_activities_list_endpoint_maps_query() {
    // テスト項目: /api/activities のクエリ文字列が型付きフィルタに変換される
    // given (前提条件):
    let mut api = MockBooking::new();
    api.expect_list_activities()
        .withf(|query| {
            query.keyword.as_deref() == Some("dance")
                && query.category == Some(Category::Sports)
                && query.size == Some(8)
                && query.page.is_none()
        })
        .times(1)
        .returning(|_| {
            Ok(ActivityList {
                cursor_id: None,
                total_count: 1,
                activities: vec![activity(1)],
            })
        });
    let server = TestServer::start(api).await;

    // when (操作):
    let response = reqwest::Client::new()
        .get(format!("{}/api/activities", server.base_url()))
        .query(&[("keyword", "dance"), ("category", "스포츠"), ("size", "8")])
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalCount"], 1);
    assert!(body["activities"].is_array());
}

#[tokio::test]
async fn test_my_notifications_endpoint() {
    // テスト項目: /api/my-notifications が通知一覧を返す
    let mut api = MockBooking::new();
    api.expect_get_my_notifications().times(1).returning(|| {
        Ok(NotificationResponse {
            cursor_id: None,
            total_count: 0,
            notifications: Vec::new(),
        })
    });
    let server = TestServer::start(api).await;

    let response = reqwest::get(format!("{}/api/my-notifications", server.base_url()))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["totalCount"], 0);
    assert!(body["notifications"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_my_reservations_endpoint_status_filter() {
    // テスト項目: /api/my-reservations の status が上流のフィルタに渡される
    let mut api = MockBooking::new();
    api.expect_get_my_reservations()
        .withf(|query| query.status == Some(ReservationStatus::Completed))
        .times(1)
        .returning(|_| {
            Ok(ReservationList {
                cursor_id: None,
                total_count: 0,
                reservations: Vec::new(),
            })
        });
    let server = TestServer::start(api).await;

    let response = reqwest::get(format!(
        "{}/api/my-reservations?status=completed",
        server.base_url()
    ))
    .await
    .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_activities_list_endpoint_malformed_query() {
    // テスト項目: 不正なクエリ文字列は上流を呼ばずにエラーエンベロープ付きの 400 を返す
    // given (前提条件): 上流呼び出しは期待しない
    let server = TestServer::start(MockBooking::new()).await;
    let client = reqwest::Client::new();

    for query in ["size=abc", "category=unknown"] {
        // when (操作):
        let response = client
            .get(format!("{}/api/activities?{}", server.base_url(), query))
            .send()
            .await
            .expect("Failed to send request");

        // then (期待する結果):
        assert_eq!(response.status(), 400, "{query}");
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"), "{content_type}");

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["status"], 400);
        assert!(!body["message"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_my_reservations_endpoint_unknown_status() {
    // テスト項目: 未知の予約ステータスは 400 とエラーエンベロープを返す
    let server = TestServer::start(MockBooking::new()).await;

    let response = reqwest::get(format!(
        "{}/api/my-reservations?status=archived",
        server.base_url()
    ))
    .await
    .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], 400);
}
