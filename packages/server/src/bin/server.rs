//! Nomad backend-for-frontend server.
//!
//! Forwards `/api/*` calls to the booking backend at `API_BASE_URL`.
//!
//! Run with:
//! ```not_rust
//! API_BASE_URL=http://localhost:4000 cargo run --bin nomad-server
//! ```

use clap::Parser;
use nomad_server::ServerConfig;
use nomad_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::parse();

    // Run the server
    if let Err(e) = nomad_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
