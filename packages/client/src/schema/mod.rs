//! Declarative shape checks for untrusted JSON.
//!
//! A schema either yields a strongly shaped value or the full list of field
//! errors. Validation is pure and never panics.

mod error_response;
mod search;

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

pub use error_response::ErrorResponse;
pub use search::SearchFormValues;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidType { expected: &'static str },
    OutOfRange { min: i64, max: i64 },
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::Required => f.write_str("is required"),
            FieldErrorKind::InvalidType { expected } => write!(f, "expected {expected}"),
            FieldErrorKind::OutOfRange { min, max } => {
                write!(f, "must be between {min} and {max}")
            }
        }
    }
}

/// A rejected field. The empty field name stands for the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "value {}", self.kind)
        } else {
            write!(f, "{} {}", self.field, self.kind)
        }
    }
}

/// Every field error found in one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join_errors(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether any error concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A shape that can be checked against untrusted JSON.
pub trait Schema: Sized {
    fn validate(value: &Value) -> Result<Self, ValidationErrors>;

    /// Parse `text` as JSON and validate it. Unparseable text is reported as
    /// an invalid value.
    fn validate_str(text: &str) -> Result<Self, ValidationErrors> {
        let value: Value = serde_json::from_str(text).map_err(|_| {
            ValidationErrors(vec![FieldError {
                field: String::new(),
                kind: FieldErrorKind::InvalidType { expected: "JSON" },
            }])
        })?;
        Self::validate(&value)
    }
}

/// Field-by-field reader that collects errors instead of stopping at the first.
///
/// `null` is treated the same as an absent field.
pub(crate) struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(value: &'a Value) -> Result<Self, ValidationErrors> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                errors: Vec::new(),
            }),
            _ => Err(ValidationErrors(vec![FieldError {
                field: String::new(),
                kind: FieldErrorKind::InvalidType { expected: "object" },
            }])),
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn reject(&mut self, field: &str, kind: FieldErrorKind) {
        self.errors.push(FieldError {
            field: field.to_string(),
            kind,
        });
    }

    pub(crate) fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.present(field) {
            None => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                self.reject(field, FieldErrorKind::InvalidType { expected: "string" });
                None
            }
        }
    }

    pub(crate) fn required_string(&mut self, field: &str) -> Option<String> {
        if self.present(field).is_none() {
            self.reject(field, FieldErrorKind::Required);
            return None;
        }
        self.optional_string(field)
    }

    pub(crate) fn optional_integer(&mut self, field: &str, min: i64, max: i64) -> Option<i64> {
        let value = self.present(field)?;
        match value.as_i64() {
            Some(number) if (min..=max).contains(&number) => Some(number),
            Some(_) => {
                self.reject(field, FieldErrorKind::OutOfRange { min, max });
                None
            }
            None => {
                self.reject(field, FieldErrorKind::InvalidType { expected: "integer" });
                None
            }
        }
    }

    /// Hand back `value` if no field was rejected.
    pub(crate) fn finish<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(ValidationErrors(self.errors));
        }
        // Every required field was read successfully at this point
        value().ok_or_else(|| ValidationErrors(Vec::new()))
    }
}
