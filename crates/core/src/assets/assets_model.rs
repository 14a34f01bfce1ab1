//! Asset domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commissions::CommissionSplit;

/// What kind of listing the asset is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingKind {
    #[default]
    Sale,
    /// Rented under an annual contract
    RentalAnnual,
    /// Rented per season (short stays)
    RentalSeasonal,
}

impl ListingKind {
    /// Whether the listing is a rental of either contract length.
    pub fn is_rental(&self) -> bool {
        matches!(self, ListingKind::RentalAnnual | ListingKind::RentalSeasonal)
    }
}

/// Transactional status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// Available on the market
    #[default]
    Active,
    /// Sold, or currently rented
    Closed,
}

/// Domain model representing a property listing tracked through its
/// transactional lifecycle.
///
/// The period fields (`closed_at`, `period_value`, `period_commission`,
/// `period_end_date`) describe the *current* contractual period only.
/// Past periods live in the ledger as immutable entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub kind: ListingKind,
    /// Asking price or asking rent while the asset is on the market
    pub list_price: Decimal,
    pub status: AssetStatus,
    /// Start date of the current period. None while Active.
    pub closed_at: Option<NaiveDate>,
    /// The lead who bought/rented. None for external closings.
    pub counterparty_lead_id: Option<String>,
    /// The agent responsible for the closing.
    pub closed_by_user_id: Option<String>,
    /// Sale price, or current rent, for the current period.
    pub period_value: Decimal,
    /// Commission generated by the current period.
    pub period_commission: Decimal,
    /// Contractual end date. Rentals only; a Closed rental carries one.
    pub period_end_date: Option<NaiveDate>,
    /// Ordered commission distribution, replaced as a whole list on save.
    #[serde(default)]
    pub commission_splits: Vec<CommissionSplit>,
    /// Free-text notes. Readjustments append audit lines here.
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    /// Whether the asset is currently on the market.
    pub fn is_active(&self) -> bool {
        self.status == AssetStatus::Active
    }

    /// Whether the current closing was brokered by a third party
    /// (recorded for inventory purposes only, no counterparty lead).
    pub fn is_external_closing(&self) -> bool {
        self.status == AssetStatus::Closed && self.counterparty_lead_id.is_none()
    }
}
