//! Tracing subscriber setup shared by every binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise the binary's own target is logged at
/// `default_level`, together with `nomad_*` crates and `tower_http` request spans.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Build the fallback filter directives for a binary.
fn default_directives(bin_name: &str, default_level: &str) -> String {
    // Tracing targets use the crate name, where '-' becomes '_'
    let target = bin_name.replace('-', "_");
    format!(
        "{target}={default_level},nomad_client={default_level},nomad_server={default_level},tower_http=debug"
    )
}
