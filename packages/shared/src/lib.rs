//! Shared utilities for the Nomad workspace.

pub mod logger;
pub mod time;
