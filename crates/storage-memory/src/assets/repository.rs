use async_trait::async_trait;
use std::sync::Arc;

use dealbook_core::assets::{Asset, AssetRepositoryTrait, AssetStatus};
use dealbook_core::errors::{DatabaseError, Result};

use super::model::AssetRow;
use crate::errors::{corrupted, serialize_failed};
use crate::store::{MemoryStore, RecordFilter, ASSETS_TABLE};

/// Repository for managing asset records in the store.
pub struct AssetRepository {
    store: Arc<MemoryStore>,
}

impl AssetRepository {
    /// Creates a new AssetRepository instance.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn coerce(doc: serde_json::Value) -> Result<Asset> {
        let id = doc
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("?")
            .to_string();
        let row: AssetRow =
            serde_json::from_value(doc).map_err(|e| corrupted(ASSETS_TABLE, &id, e))?;
        Ok(row.into())
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        let filter = RecordFilter::new("id", asset_id);
        let doc = self
            .store
            .fetch_all(ASSETS_TABLE, Some(&filter))?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::NotFound(format!("asset {}", asset_id)))?;
        Self::coerce(doc)
    }

    fn list(&self, status: Option<AssetStatus>) -> Result<Vec<Asset>> {
        let filter = status.map(|status| {
            // Statuses serialize to plain strings, so to_value cannot fail.
            RecordFilter::new("status", serde_json::json!(status))
        });
        self.store
            .fetch_all(ASSETS_TABLE, filter.as_ref())?
            .into_iter()
            .map(Self::coerce)
            .collect()
    }

    async fn update(&self, asset: Asset) -> Result<Asset> {
        let mut row = AssetRow::from(asset);
        row.updated_at = chrono::Utc::now();

        let doc = serde_json::to_value(&row).map_err(|e| serialize_failed(ASSETS_TABLE, e))?;
        let stored = self.store.update(ASSETS_TABLE, doc)?;
        Self::coerce(stored)
    }
}
