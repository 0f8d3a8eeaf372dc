//! Shared data models.

pub mod query;

pub use query::{EqualityFilter, ListDocumentsRequest, QueryResult};
