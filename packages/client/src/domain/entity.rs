//! Read-only projections of backend resources.
//!
//! The backend owns and mutates every one of these; the client only holds
//! what a response handed it.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::value_object::{ActivityId, Category, ReservationStatus, UserId};

/// A bookable experience
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    /// Owner of the activity
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: i64,
    pub address: String,
    pub banner_image_url: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// One page of activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityList {
    #[serde(default)]
    pub cursor_id: Option<i64>,
    pub total_count: u64,
    pub activities: Vec<Activity>,
}

/// Review author as embedded in a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub id: UserId,
    pub nickname: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user: Reviewer,
    pub activity_id: ActivityId,
    pub rating: u8,
    pub content: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Reviews of one activity with aggregate rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewList {
    pub average_rating: f64,
    pub total_count: u64,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub team_id: String,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

/// Notifications of the signed-in user.
///
/// Treated as an opaque value; no invariants are enforced beyond the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    #[serde(default)]
    pub cursor_id: Option<i64>,
    pub total_count: u64,
    pub notifications: Vec<Notification>,
}

/// Activity summary embedded in a reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedActivity {
    pub id: ActivityId,
    pub title: String,
    pub banner_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub activity: ReservedActivity,
    pub status: ReservationStatus,
    pub date: NaiveDate,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub head_count: u32,
    pub total_price: i64,
    pub review_submitted: bool,
}

/// One page of the signed-in user's reservations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationList {
    #[serde(default)]
    pub cursor_id: Option<i64>,
    pub total_count: u64,
    pub reservations: Vec<Reservation>,
}
