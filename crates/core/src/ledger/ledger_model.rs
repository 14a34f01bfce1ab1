//! Ledger domain models.
//!
//! A ledger entry records one finished contractual period of an asset: the
//! value and commission that applied, and the window they applied for.
//! Entries are written once, at renewal/readjustment time, and never
//! mutated. The newest entry's `period_end` equals the asset's current
//! `closed_at`, forming a singly-linked chain backward in time.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, AssetStatus};
use crate::errors::{Result, ValidationError};

/// What kind of transaction produced the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerKind {
    Sale,
    #[default]
    Rental,
}

/// Domain model for a historical financial record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub asset_id: String,
    pub kind: LedgerKind,
    pub value: Decimal,
    pub commission: Decimal,
    /// When the entry was written.
    pub recorded_at: DateTime<Utc>,
    /// The window this entry was valid for.
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// Input model for appending a ledger entry. The store stamps `id` and
/// `recorded_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLedgerEntry {
    pub asset_id: String,
    pub kind: LedgerKind,
    pub value: Decimal,
    pub commission: Decimal,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl NewLedgerEntry {
    /// Validates the entry before it is appended.
    pub fn validate(&self) -> Result<()> {
        if self.period_end < self.period_start {
            return Err(ValidationError::InvalidDateRange {
                start: self.period_start,
                end: self.period_end,
            }
            .into());
        }
        if self.value.is_sign_negative() {
            return Err(ValidationError::NegativeAmount("value".to_string()).into());
        }
        if self.commission.is_sign_negative() {
            return Err(ValidationError::NegativeAmount("commission".to_string()).into());
        }
        Ok(())
    }
}

/// One contiguous interval during which a given value and commission
/// applied. The current period of a Closed asset has an open `end` when no
/// contractual end date is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub value: Decimal,
    pub commission: Decimal,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

/// Walks the period chain newest-to-oldest.
///
/// Starts from the asset's current period when it has one, then follows the
/// links: each older entry is the one whose `period_end` equals the start of
/// the period found before it. Entries that do not link (gaps left in legacy
/// data by reactivations that were never archived) terminate the walk.
pub fn period_timeline(asset: &Asset, entries: &[LedgerEntry]) -> Vec<Period> {
    let mut timeline = Vec::new();

    let mut cursor = match (asset.status, asset.closed_at) {
        (AssetStatus::Closed, Some(closed_at)) => {
            timeline.push(Period {
                value: asset.period_value,
                commission: asset.period_commission,
                start: closed_at,
                end: asset.period_end_date,
            });
            Some(closed_at)
        }
        // A reactivated asset has no current period; anchor on the newest
        // archived entry instead.
        _ => entries.iter().map(|e| e.period_end).max(),
    };

    while let Some(link) = cursor {
        let entry = match entries
            .iter()
            .find(|e| e.asset_id == asset.id && e.period_end == link)
        {
            Some(entry) => entry,
            None => break,
        };
        timeline.push(Period {
            value: entry.value,
            commission: entry.commission,
            start: entry.period_start,
            end: Some(entry.period_end),
        });
        // A zero-length period links to itself; stop rather than loop.
        if entry.period_start == link {
            break;
        }
        cursor = Some(entry.period_start);
    }

    timeline
}
