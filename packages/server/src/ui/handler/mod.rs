//! Handler modules for HTTP endpoints.

pub mod error;
pub mod http;

// Re-export HTTP handlers
pub use http::{
    delete_my_activity, get_activity_detail, get_activity_reviews, get_my_notifications,
    get_my_reservations, health_check, list_activities,
};
