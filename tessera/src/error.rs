//! Error types for prop validation and row parsing.
//!
//! Rendering and event handling never fail. These errors only come out of
//! explicit checks (`DataTable::validate`) and constructors
//! (`Record::from_json`).

use crate::widgets::table::RowId;

/// A problem with the props handed to a component.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropError {
    /// Two columns share a key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumnKey { key: String },

    /// The key is taken by a built-in column.
    #[error("Column key '{key}' is reserved")]
    ReservedColumnKey { key: String },

    /// Two rows share an id, which makes selection ambiguous.
    #[error("Duplicate row id '{id}'")]
    DuplicateRowId { id: RowId },
}

/// Error building a [`Record`](crate::widgets::table::Record) from JSON.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("Row must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Row list must be a JSON array, got {found}")]
    NotAnArray { found: &'static str },

    #[error("Row has no 'id' field")]
    MissingId,

    #[error("Row id must be a string or integer, got {found}")]
    InvalidId { found: &'static str },

    /// Only strings, numbers, booleans and null are allowed as attributes.
    #[error("Field '{field}' has unsupported type {found}")]
    UnsupportedValue { field: String, found: &'static str },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
