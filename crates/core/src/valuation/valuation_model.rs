//! Effective-value resolution.
//!
//! Renewals and readjustments may be recorded with a future start date, so a
//! Closed asset's own period fields can describe a period that has not
//! started yet. Trusting them unconditionally would overstate revenue on any
//! dashboard that aggregates "current" rent. The resolver decides, per
//! reference date, whether the asset's fields or a chained ledger entry are
//! the figures actually being collected.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::ledger::LedgerEntry;

/// Where the effective figures came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectiveSource {
    /// The asset's own period is in force.
    CurrentPeriod,
    /// A pre-scheduled change has not started; the chained ledger entry is
    /// what is being collected today.
    LedgerChain,
    /// Future-dated brand-new contract with no prior period. The asset's
    /// fields are returned for display, flagged as not yet in force.
    NotStarted,
}

/// The value and commission in force on a reference date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveFinancials {
    pub value: Decimal,
    pub commission: Decimal,
    pub source: EffectiveSource,
}

/// Resolves the financials in force on `reference_date`.
///
/// 1. A period that already started (or starts today) is authoritative.
/// 2. A future-dated period defers to the ledger entry it will terminate,
///    the one whose `period_end` equals the asset's `closed_at` exactly.
/// 3. With no such entry, the upcoming figures are returned flagged as
///    `NotStarted`.
pub fn effective_financials(
    asset: &Asset,
    entries: &[LedgerEntry],
    reference_date: NaiveDate,
) -> EffectiveFinancials {
    let closed_at = match asset.closed_at {
        Some(closed_at) if closed_at > reference_date => closed_at,
        _ => {
            return EffectiveFinancials {
                value: asset.period_value,
                commission: asset.period_commission,
                source: EffectiveSource::CurrentPeriod,
            }
        }
    };

    match entries
        .iter()
        .find(|e| e.asset_id == asset.id && e.period_end == closed_at)
    {
        Some(entry) => EffectiveFinancials {
            value: entry.value,
            commission: entry.commission,
            source: EffectiveSource::LedgerChain,
        },
        None => EffectiveFinancials {
            value: asset.period_value,
            commission: asset.period_commission,
            source: EffectiveSource::NotStarted,
        },
    }
}
