//! API base-URL configuration.
//!
//! The execution context is an explicit value chosen by the caller. Server
//! code and browser-facing code read different variables, and neither ever
//! falls back to the other's.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Server-only base URL variable.
pub const SERVER_BASE_URL_ENV: &str = "API_BASE_URL";

/// Publicly exposed base URL variable.
pub const PUBLIC_BASE_URL_ENV: &str = "NEXT_PUBLIC_API_BASE_URL";

/// Where the API client is going to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    Server,
    Browser,
}

impl ExecutionContext {
    /// Environment variable holding the base URL for this context.
    pub fn base_url_var(self) -> &'static str {
        match self {
            ExecutionContext::Server => SERVER_BASE_URL_ENV,
            ExecutionContext::Browser => PUBLIC_BASE_URL_ENV,
        }
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionContext::Server => f.write_str("server"),
            ExecutionContext::Browser => f.write_str("browser"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },

    #[error("{0} cannot be used as an API base URL")]
    NotABase(String),

    #[error("API base URL {0} must not carry a query string or fragment")]
    QueryOrFragment(String),
}

/// Resolved configuration for one API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Use an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotABase` for URLs such as `mailto:` that cannot
    /// have request paths appended, and `ConfigError::QueryOrFragment` when
    /// endpoint paths would land after a `?` or `#`.
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(base_url.to_string()));
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(ConfigError::QueryOrFragment(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Resolve the base URL for `context` from the process environment.
    pub fn from_env(context: ExecutionContext) -> Result<Self, ConfigError> {
        Self::from_lookup(context, |name| std::env::var(name).ok())
    }

    /// Resolve the base URL for `context` through `lookup`.
    ///
    /// Only the variable belonging to `context` is ever looked up. Blank
    /// values count as unset.
    pub fn from_lookup<F>(context: ExecutionContext, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = context.base_url_var();
        let raw = lookup(var)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar(var))?;
        let base_url =
            Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { var, source })?;
        tracing::debug!("Resolved API base URL for {} context from {}", context, var);
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
