//! Row model for assets.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dealbook_core::assets::{Asset, AssetStatus, ListingKind};
use dealbook_core::commissions::CommissionSplit;

/// The shape an asset document takes in the store. Documents are coerced
/// into this on read, so a malformed record surfaces as a typed error
/// instead of leaking into the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    pub id: String,
    pub kind: ListingKind,
    pub list_price: Decimal,
    pub status: AssetStatus,
    #[serde(default)]
    pub closed_at: Option<NaiveDate>,
    #[serde(default)]
    pub counterparty_lead_id: Option<String>,
    #[serde(default)]
    pub closed_by_user_id: Option<String>,
    pub period_value: Decimal,
    pub period_commission: Decimal,
    #[serde(default)]
    pub period_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub commission_splits: Vec<CommissionSplit>,
    #[serde(default)]
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// Conversion implementations
impl From<AssetRow> for Asset {
    fn from(row: AssetRow) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
            list_price: row.list_price,
            status: row.status,
            closed_at: row.closed_at,
            counterparty_lead_id: row.counterparty_lead_id,
            closed_by_user_id: row.closed_by_user_id,
            period_value: row.period_value,
            period_commission: row.period_commission,
            period_end_date: row.period_end_date,
            commission_splits: row.commission_splits,
            notes: row.notes,
            updated_at: row.updated_at,
        }
    }
}

impl From<Asset> for AssetRow {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            kind: asset.kind,
            list_price: asset.list_price,
            status: asset.status,
            closed_at: asset.closed_at,
            counterparty_lead_id: asset.counterparty_lead_id,
            closed_by_user_id: asset.closed_by_user_id,
            period_value: asset.period_value,
            period_commission: asset.period_commission,
            period_end_date: asset.period_end_date,
            commission_splits: asset.commission_splits,
            notes: asset.notes,
            updated_at: asset.updated_at,
        }
    }
}
