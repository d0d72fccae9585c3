//! Mapping of failures onto HTTP responses.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nomad_client::{ServiceError, domain::ValueObjectError, schema::ErrorResponse};

/// Error response of the BFF: a status plus an `ErrorResponse` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(message, Some(status.as_u16())),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(error: ValueObjectError) -> Self {
        tracing::warn!("Rejected request parameter: {}", error);
        Self::new(StatusCode::BAD_REQUEST, error.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match &error {
            // Upstream answered: keep its status and its message when it sent one
            ServiceError::Status {
                status, message, ..
            } => {
                let message = message.clone().unwrap_or_else(|| error.to_string());
                Self::new(*status, message)
            }
            ServiceError::Transport(_)
            | ServiceError::Decode { .. }
            | ServiceError::InvalidUrl { .. } => {
                tracing::error!("Upstream call failed: {}", error);
                Self::new(StatusCode::BAD_GATEWAY, error.to_string())
            }
        }
    }
}
