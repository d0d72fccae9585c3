//! Endpoint composition.
//!
//! Every backend path the workspace calls is spelled out here and nowhere
//! else. Paths are relative to the API base URL, start with `/`, and never
//! carry a trailing slash or a query string.

use std::fmt;

use crate::domain::ActivityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/activities`
    Activities,
    /// `/activities/{id}`
    ActivityDetail(ActivityId),
    /// `/activities/{id}/reviews`
    ActivityReviews(ActivityId),
    /// `/my-activities`
    MyActivities,
    /// `/my-activities/{id}`
    MyActivityDetail(ActivityId),
    /// `/my-notifications`
    MyNotifications,
    /// `/my-reservations`
    MyReservations,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Activities => "/activities".to_string(),
            Endpoint::ActivityDetail(id) => format!("/activities/{id}"),
            Endpoint::ActivityReviews(id) => format!("/activities/{id}/reviews"),
            Endpoint::MyActivities => "/my-activities".to_string(),
            Endpoint::MyActivityDetail(id) => format!("/my-activities/{id}"),
            Endpoint::MyNotifications => "/my-notifications".to_string(),
            Endpoint::MyReservations => "/my-reservations".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
