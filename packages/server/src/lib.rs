//! Backend-for-frontend server for the Nomad activity-booking product.
//!
//! Exposes the booking backend's operations under `/api` and forwards each
//! call through `nomad-client`.

pub mod config;
pub mod ui;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
