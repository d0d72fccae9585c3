//! HTTP layer of the BFF server.

pub mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::create_router;
pub use runner::{ServerError, run};
pub use state::AppState;
