//! Errors and raw responses of the service layer.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of one backend operation.
///
/// Nothing is retried or recovered here; callers decide how to present it.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backend answered with a non-success status
    #[error("Failed to {operation}: {status_text}")]
    Status {
        /// What was being attempted, e.g. `fetch activity detail`
        operation: &'static str,
        status: StatusCode,
        /// Reason phrase of `status`, e.g. `Not Found`
        status_text: String,
        /// Backend message, when the body was a valid error envelope
        message: Option<String>,
    },

    /// Network or protocol failure before a status was received
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The body of a successful response did not match the expected shape
    #[error("Failed to {operation}: unexpected response body: {source}")]
    Decode {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// The composed request URL was invalid
    #[error("Failed to {operation}: invalid request URL: {source}")]
    InvalidUrl {
        operation: &'static str,
        source: url::ParseError,
    },
}

impl ServiceError {
    /// Upstream status, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            ServiceError::Transport(error) => error.status(),
            ServiceError::Decode { .. } | ServiceError::InvalidUrl { .. } => None,
        }
    }
}

/// Human-readable reason phrase for a status code.
///
/// Falls back to the numeric code for statuses without a canonical reason.
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Response handed back as-is by operations that do not decode a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    /// Body text; empty for `204 No Content`
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
