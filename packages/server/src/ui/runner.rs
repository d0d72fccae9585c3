//! Server startup.

use std::sync::Arc;

use nomad_client::{
    ApiService, ExecutionContext,
    infrastructure::{ApiClient, ClientInitError},
};
use thiserror::Error;
use tokio::net::TcpListener;

use super::{router::create_router, signal::shutdown_signal, state::AppState};
use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to initialize API client: {0}")]
    Client(#[from] ClientInitError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the shared API client, bind, and serve until a shutdown signal.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    // One client per process, shared by every request
    let client = ApiClient::from_env(ExecutionContext::Server)?;
    tracing::info!("Forwarding API calls to {}", client.base_url());

    let state = Arc::new(AppState::new(Arc::new(ApiService::new(client))));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
