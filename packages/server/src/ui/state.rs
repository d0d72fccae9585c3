//! Server state.

use std::sync::Arc;

use nomad_client::BookingApi;

/// Shared application state
pub struct AppState {
    /// Backend access（通信層の抽象化）
    pub api: Arc<dyn BookingApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }
}
