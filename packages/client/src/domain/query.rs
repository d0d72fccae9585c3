//! Typed filters for list endpoints.
//!
//! Each recognized query parameter is a field; unset fields are left out of
//! the query string entirely.

use serde::{Deserialize, Serialize};

use super::value_object::{Category, ReservationStatus};

/// Pagination style of `GET /activities`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMethod {
    #[default]
    Offset,
    Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySort {
    MostReviewed,
    PriceAsc,
    PriceDesc,
    Latest,
}

/// Filter for `GET /activities`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityListQuery {
    #[serde(default)]
    pub method: PaginationMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<ActivitySort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Filter for `GET /my-reservations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
}

impl ReservationListQuery {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
