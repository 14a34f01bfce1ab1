use async_trait::async_trait;
use std::sync::Arc;

use dealbook_core::errors::{DatabaseError, Result};
use dealbook_core::leads::{Lead, LeadRepositoryTrait, LeadStatus};

use super::model::LeadRow;
use crate::errors::corrupted;
use crate::store::{MemoryStore, RecordFilter, LEADS_TABLE};

/// Repository for managing lead records in the store.
pub struct LeadRepository {
    store: Arc<MemoryStore>,
}

impl LeadRepository {
    /// Creates a new LeadRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn coerce(doc: serde_json::Value) -> Result<Lead> {
        let id = doc
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("?")
            .to_string();
        let row: LeadRow =
            serde_json::from_value(doc).map_err(|e| corrupted(LEADS_TABLE, &id, e))?;
        Ok(row.into())
    }
}

#[async_trait]
impl LeadRepositoryTrait for LeadRepository {
    fn get_by_id(&self, lead_id: &str) -> Result<Lead> {
        let filter = RecordFilter::new("id", lead_id);
        let doc = self
            .store
            .fetch_all(LEADS_TABLE, Some(&filter))?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::NotFound(format!("lead {}", lead_id)))?;
        Self::coerce(doc)
    }

    async fn update_status(&self, lead_id: &str, status: LeadStatus) -> Result<Lead> {
        // Partial update: only the status and the audit stamp change.
        let partial = serde_json::json!({
            "id": lead_id,
            "status": status,
            "updatedAt": chrono::Utc::now(),
        });
        let stored = self.store.update(LEADS_TABLE, partial)?;
        Self::coerce(stored)
    }
}
