//! Conversion helpers from storage errors to core error types.

use dealbook_core::errors::{DatabaseError, Error};

/// A stored document failed to coerce into its typed row model.
pub(crate) fn corrupted(table: &str, id: &str, err: serde_json::Error) -> Error {
    DatabaseError::Corrupted(format!("{} record {}: {}", table, id, err)).into()
}

/// A domain model failed to serialize into a storable document.
pub(crate) fn serialize_failed(table: &str, err: serde_json::Error) -> Error {
    DatabaseError::QueryFailed(format!("could not serialize {} record: {}", table, err)).into()
}
