//! The in-memory record store.
//!
//! Records live in named tables as loosely-typed JSON documents, the shape
//! the surrounding application's remote store hands back. Typed coercion
//! happens at the repository boundary, not here.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use dealbook_core::errors::{DatabaseError, Result};

/// Logical table holding assets.
pub const ASSETS_TABLE: &str = "assets";
/// Logical table holding leads.
pub const LEADS_TABLE: &str = "leads";
/// Logical table holding ledger entries. Append-only: the store refuses
/// updates and deletes on it.
pub const LEDGER_ENTRIES_TABLE: &str = "ledger_entries";

/// Exact-match filter on a top-level document field.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    pub field: String,
    pub value: Value,
}

impl RecordFilter {
    pub fn new(field: &str, value: impl Into<Value>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Named tables of JSON documents behind one lock.
///
/// Single-threaded callers only contend with themselves; the lock exists so
/// the store is safely shareable behind `Arc` across async call sites.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Value>>>,
}

fn record_id(record: &Value) -> Option<String> {
    record
        .get("id")
        .and_then(Value::as_str)
        .map(|id| id.to_string())
}

fn references(record: &Value, field: &str, id: &str) -> bool {
    record.get(field).and_then(Value::as_str) == Some(id)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches all documents of a table, optionally filtered by an
    /// exact-match condition on one top-level field.
    pub fn fetch_all(&self, table: &str, filter: Option<&RecordFilter>) -> Result<Vec<Value>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| DatabaseError::QueryFailed("store lock poisoned".to_string()))?;
        let records = tables.get(table).cloned().unwrap_or_default();
        Ok(match filter {
            Some(filter) => records
                .into_iter()
                .filter(|r| r.get(&filter.field) == Some(&filter.value))
                .collect(),
            None => records,
        })
    }

    /// Inserts a document, stamping a generated `id` when the caller did
    /// not supply one. Returns the stored document.
    pub fn insert(&self, table: &str, record: Value) -> Result<Value> {
        let mut record = record;
        let map = record.as_object_mut().ok_or_else(|| {
            DatabaseError::QueryFailed(format!("{} record is not an object", table))
        })?;
        if !map.get("id").map(Value::is_string).unwrap_or(false) {
            map.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }

        let mut tables = self
            .tables
            .write()
            .map_err(|_| DatabaseError::QueryFailed("store lock poisoned".to_string()))?;
        tables
            .entry(table.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    /// Merges a partial document (which must carry `id`) into the stored
    /// record and returns the merged result.
    pub fn update(&self, table: &str, partial: Value) -> Result<Value> {
        if table == LEDGER_ENTRIES_TABLE {
            return Err(DatabaseError::ImmutableRecord(format!(
                "{} records cannot be updated",
                table
            ))
            .into());
        }
        let id = record_id(&partial).ok_or_else(|| {
            DatabaseError::QueryFailed(format!("{} update without an id", table))
        })?;
        let fields = match partial {
            Value::Object(map) => map,
            _ => {
                return Err(DatabaseError::QueryFailed(format!(
                    "{} record is not an object",
                    table
                ))
                .into())
            }
        };

        let mut tables = self
            .tables
            .write()
            .map_err(|_| DatabaseError::QueryFailed("store lock poisoned".to_string()))?;
        let records = tables
            .get_mut(table)
            .ok_or_else(|| DatabaseError::NotFound(format!("{} {}", table, id)))?;
        let stored = records
            .iter_mut()
            .find(|r| record_id(r).as_deref() == Some(id.as_str()))
            .ok_or_else(|| DatabaseError::NotFound(format!("{} {}", table, id)))?;

        let target = stored.as_object_mut().ok_or_else(|| {
            DatabaseError::Corrupted(format!("{} record {} is not an object", table, id))
        })?;
        for (key, value) in fields {
            target.insert(key, value);
        }
        Ok(stored.clone())
    }

    /// Deletes a record by id.
    ///
    /// Fails with a distinguishable error when another table still
    /// references the record, and refuses deletes on append-only tables.
    pub fn delete(&self, table: &str, id: &str) -> Result<()> {
        if table == LEDGER_ENTRIES_TABLE {
            return Err(DatabaseError::ImmutableRecord(format!(
                "{} records cannot be deleted",
                table
            ))
            .into());
        }

        let mut tables = self
            .tables
            .write()
            .map_err(|_| DatabaseError::QueryFailed("store lock poisoned".to_string()))?;

        let referenced = match table {
            LEADS_TABLE => tables
                .get(ASSETS_TABLE)
                .map(|assets| {
                    assets
                        .iter()
                        .any(|a| references(a, "counterpartyLeadId", id))
                })
                .unwrap_or(false),
            ASSETS_TABLE => tables
                .get(LEDGER_ENTRIES_TABLE)
                .map(|entries| entries.iter().any(|e| references(e, "assetId", id)))
                .unwrap_or(false),
            _ => false,
        };
        if referenced {
            return Err(DatabaseError::ReferentialConstraint(format!(
                "{} {} is still referenced",
                table, id
            ))
            .into());
        }

        let records = tables
            .get_mut(table)
            .ok_or_else(|| DatabaseError::NotFound(format!("{} {}", table, id)))?;
        let before = records.len();
        records.retain(|r| record_id(r).as_deref() != Some(id));
        if records.len() == before {
            return Err(DatabaseError::NotFound(format!("{} {}", table, id)).into());
        }
        Ok(())
    }
}
