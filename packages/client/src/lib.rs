//! Typed API access layer for the Nomad activity-booking backend.
//!
//! Construction of the HTTP client against an execution-context-selected base
//! URL, centralized endpoint composition, error normalization, and schema
//! validation for form shapes and error envelopes.

pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod schema;

pub use config::{ApiConfig, ConfigError, ExecutionContext};
pub use domain::BookingApi;
pub use error::{RawResponse, ServiceError};
pub use infrastructure::{ApiClient, ApiService, Endpoint};
