//! Movie documents.
//!
//! Movies are schemaless: apart from `_id` every attribute is carried through
//! verbatim. `title` is the only other field the service ever looks at, and
//! only as an equality filter.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;
use crate::ids::MovieId;

/// Reserved key holding the store-assigned identifier.
pub const ID_FIELD: &str = "_id";

/// Field used by list filtering.
pub const TITLE_FIELD: &str = "title";

/// Field used to order list results.
pub const YEAR_FIELD: &str = "year";

/// Attribute map of a movie, excluding `_id`.
pub type MovieFields = Map<String, Value>;

/// A persisted movie: its identifier plus every client-supplied attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: MovieId,
    #[serde(flatten)]
    pub fields: MovieFields,
}

impl Movie {
    pub fn new(id: MovieId, fields: MovieFields) -> Self {
        Self { id, fields }
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get(TITLE_FIELD).and_then(Value::as_str)
    }

    /// Merges `document` into this movie, field by field. The id is untouched.
    pub fn apply(&mut self, document: &MovieDocument) {
        for (key, value) in document.fields() {
            self.fields.insert(key.clone(), value.clone());
        }
    }
}

/// Client-submitted movie body for create and update.
///
/// Always a JSON object. A `_id` key is stripped on construction since the
/// identifier is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDocument(MovieFields);

impl MovieDocument {
    pub fn new(mut fields: MovieFields) -> Self {
        fields.remove(ID_FIELD);
        Self(fields)
    }

    pub fn from_json(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            other => Err(DomainError::invalid_document(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn fields(&self) -> &MovieFields {
        &self.0
    }

    pub fn into_fields(self) -> MovieFields {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
