//! Row model for ledger entries.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dealbook_core::ledger::{LedgerEntry, LedgerKind};

/// The shape a ledger entry document takes in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryRow {
    pub id: String,
    pub asset_id: String,
    pub kind: LedgerKind,
    pub value: Decimal,
    pub commission: Decimal,
    pub recorded_at: DateTime<Utc>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl From<LedgerEntryRow> for LedgerEntry {
    fn from(row: LedgerEntryRow) -> Self {
        Self {
            id: row.id,
            asset_id: row.asset_id,
            kind: row.kind,
            value: row.value,
            commission: row.commission,
            recorded_at: row.recorded_at,
            period_start: row.period_start,
            period_end: row.period_end,
        }
    }
}

impl From<LedgerEntry> for LedgerEntryRow {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: entry.id,
            asset_id: entry.asset_id,
            kind: entry.kind,
            value: entry.value,
            commission: entry.commission,
            recorded_at: entry.recorded_at,
            period_start: entry.period_start,
            period_end: entry.period_end,
        }
    }
}
