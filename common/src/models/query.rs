//! Document query models.
//!
//! A query targets one collection of one database and carries zero or more
//! equality filters, combined with logical AND by the backend.

use serde::{Serialize, Serializer};
use serde_json::json;
use serde_json::value::RawValue;
use validator::Validate;

/// Opaque backend result (`{"total": n, "documents": [...]}` for Appwrite).
///
/// Holds the exact JSON text the backend sent. Serializing it writes that text
/// back out untouched, so key order and number formatting survive the relay.
#[derive(Debug, Clone)]
pub struct QueryResult(Box<RawValue>);

impl QueryResult {
    /// Validates `bytes` as a single JSON value and keeps them verbatim.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<Box<RawValue>>(bytes).map(Self)
    }

    /// Result built from an in-memory value.
    pub fn from_value(value: &serde_json::Value) -> serde_json::Result<Self> {
        serde_json::value::to_raw_value(value).map(Self)
    }

    /// Raw JSON text.
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// Parses the raw text into a [`serde_json::Value`].
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(self.0.get())
    }
}

impl PartialEq for QueryResult {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for QueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Request to list the documents of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ListDocumentsRequest {
    /// Database identifier.
    #[validate(length(min = 1, message = "Database ID is required"))]
    pub database_id: String,

    /// Collection identifier.
    #[validate(length(min = 1, message = "Collection ID is required"))]
    pub collection_id: String,

    /// Equality filters, in order.
    pub filters: Vec<EqualityFilter>,
}

impl ListDocumentsRequest {
    /// Unfiltered listing of a collection.
    pub fn new(database_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            collection_id: collection_id.into(),
            filters: Vec::new(),
        }
    }

    /// Adds a `field = value` filter.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(EqualityFilter::new(field, value));
        self
    }
}

/// `field = value` predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityFilter {
    pub field: String,
    pub value: String,
}

impl EqualityFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Encodes the filter in Appwrite's JSON query syntax.
    pub fn to_appwrite_query(&self) -> String {
        json!({
            "method": "equal",
            "attribute": self.field,
            "values": [self.value],
        })
        .to_string()
    }
}
