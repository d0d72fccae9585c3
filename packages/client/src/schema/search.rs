//! Search form shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ObjectReader, Schema, ValidationErrors};

/// State of the activity search form. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFormValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Schema for SearchFormValues {
    fn validate(value: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = ObjectReader::new(value)?;
        let title = reader.optional_string("title");
        let location = reader.optional_string("location");
        let date = reader.optional_string("date");
        reader.finish(|| {
            Some(Self {
                title,
                location,
                date,
            })
        })
    }
}
