//! Error envelope shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ObjectReader, Schema, ValidationErrors};

/// Normalized failure envelope, from the backend or built locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Backend message carried by an error body.
    ///
    /// A malformed `status` does not hide a well-formed `message`.
    pub fn message_from_body(body: &str) -> Option<String> {
        if let Ok(envelope) = Self::validate_str(body) {
            return Some(envelope.message);
        }
        let value: Value = serde_json::from_str(body).ok()?;
        value.get("message")?.as_str().map(str::to_string)
    }
}

impl Schema for ErrorResponse {
    fn validate(value: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = ObjectReader::new(value)?;
        let message = reader.required_string("message");
        let status = reader
            .optional_integer("status", 100, 599)
            .and_then(|status| u16::try_from(status).ok());
        reader.finish(|| Some(Self { message: message?, status }))
    }
}
