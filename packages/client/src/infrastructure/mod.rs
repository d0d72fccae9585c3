//! Infrastructure layer: HTTP transport to the booking backend.
//!
//! Implements the domain's `BookingApi` port with reqwest.

pub mod api_client;
pub mod endpoint;
pub mod service;

pub use api_client::{ApiClient, ClientInitError};
pub use endpoint::Endpoint;
pub use service::ApiService;
