//! Ledger repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::ledger_model::{LedgerEntry, NewLedgerEntry};
use crate::errors::Result;

/// Trait defining the contract for Ledger repository operations.
///
/// The ledger is append-only: entries are created once and never updated or
/// deleted by the engine. Implementations are expected to enforce this.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Appends a new entry.
    async fn append(&self, entry: NewLedgerEntry) -> Result<LedgerEntry>;

    /// Lists all entries for an asset, newest period first.
    fn list_by_asset(&self, asset_id: &str) -> Result<Vec<LedgerEntry>>;

    /// Finds the entry for an asset whose `period_end` equals the given
    /// date exactly, if one exists.
    fn find_by_period_end(
        &self,
        asset_id: &str,
        period_end: NaiveDate,
    ) -> Result<Option<LedgerEntry>>;
}
