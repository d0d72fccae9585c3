//! Domain layer of the booking API access layer.
//!
//! This module contains the backend's resources as read-only projections,
//! the value objects they are built from, and the port the rest of the
//! workspace calls through.

pub mod entity;
pub mod error;
pub mod port;
pub mod query;
pub mod value_object;

pub use entity::{
    Activity, ActivityList, Notification, NotificationResponse, Reservation, ReservationList,
    ReservedActivity, Review, ReviewList, Reviewer,
};
pub use error::ValueObjectError;
pub use port::BookingApi;
pub use query::{ActivityListQuery, ActivitySort, PaginationMethod, ReservationListQuery};
pub use value_object::{ActivityId, Category, ReservationStatus, UserId};
