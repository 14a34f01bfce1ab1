use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use dealbook_core::errors::Result;
use dealbook_core::ledger::{LedgerEntry, LedgerRepositoryTrait, NewLedgerEntry};

use super::model::LedgerEntryRow;
use crate::errors::{corrupted, serialize_failed};
use crate::store::{MemoryStore, RecordFilter, LEDGER_ENTRIES_TABLE};

/// Repository for the append-only ledger table.
pub struct LedgerRepository {
    store: Arc<MemoryStore>,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn coerce(doc: serde_json::Value) -> Result<LedgerEntry> {
        let id = doc
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("?")
            .to_string();
        let row: LedgerEntryRow =
            serde_json::from_value(doc).map_err(|e| corrupted(LEDGER_ENTRIES_TABLE, &id, e))?;
        Ok(row.into())
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    async fn append(&self, entry: NewLedgerEntry) -> Result<LedgerEntry> {
        entry.validate()?;
        debug!(
            "Appending ledger entry for asset {} ({} to {})",
            entry.asset_id, entry.period_start, entry.period_end
        );

        let row = LedgerEntryRow {
            id: uuid::Uuid::new_v4().to_string(),
            asset_id: entry.asset_id,
            kind: entry.kind,
            value: entry.value,
            commission: entry.commission,
            recorded_at: chrono::Utc::now(),
            period_start: entry.period_start,
            period_end: entry.period_end,
        };
        let doc =
            serde_json::to_value(&row).map_err(|e| serialize_failed(LEDGER_ENTRIES_TABLE, e))?;
        let stored = self.store.insert(LEDGER_ENTRIES_TABLE, doc)?;
        Self::coerce(stored)
    }

    fn list_by_asset(&self, asset_id: &str) -> Result<Vec<LedgerEntry>> {
        let filter = RecordFilter::new("assetId", asset_id);
        let mut entries = self
            .store
            .fetch_all(LEDGER_ENTRIES_TABLE, Some(&filter))?
            .into_iter()
            .map(Self::coerce)
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by(|a, b| b.period_end.cmp(&a.period_end));
        Ok(entries)
    }

    fn find_by_period_end(
        &self,
        asset_id: &str,
        period_end: NaiveDate,
    ) -> Result<Option<LedgerEntry>> {
        Ok(self
            .list_by_asset(asset_id)?
            .into_iter()
            .find(|e| e.period_end == period_end))
    }
}
