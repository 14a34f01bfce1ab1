//! Transaction request models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transactions_errors::TransactionError;
use crate::assets::{Asset, AssetStatus};
use crate::leads::Lead;

/// Input for closing an asset (selling it, or renting it out).
///
/// A closing without a counterparty is "external": the deal was brokered by
/// a third party and is recorded for inventory purposes only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseRequest {
    pub counterparty_lead_id: Option<String>,
    pub closed_by_user_id: Option<String>,
    pub period_value: Decimal,
    pub commission_amount: Decimal,
    /// Start date of the period. Required for rentals; defaults to today's
    /// business date for sales.
    pub period_start: Option<NaiveDate>,
    /// Contractual end date. Required for rentals.
    pub period_end_date: Option<NaiveDate>,
}

impl CloseRequest {
    /// Validates the request against the asset being closed.
    pub fn validate(&self, asset: &Asset) -> Result<(), TransactionError> {
        if asset.status != AssetStatus::Active {
            return Err(TransactionError::AssetNotActive(asset.id.clone()));
        }
        if self.counterparty_lead_id.is_some() && self.closed_by_user_id.is_none() {
            return Err(TransactionError::MissingClosingAgent);
        }
        if asset.kind.is_rental() {
            let (start, end) = match (self.period_start, self.period_end_date) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(TransactionError::MissingPeriodDates),
            };
            if end <= start {
                return Err(TransactionError::EndDateNotAfterStart { start, end });
            }
        }
        Ok(())
    }
}

/// The result of a close: the committed asset, and the counterparty lead
/// when one was advanced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseOutcome {
    pub asset: Asset,
    pub lead: Option<Lead>,
}

/// Input for renewing a rental contract into a new period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewRequest {
    pub new_value: Decimal,
    pub new_commission: Decimal,
    pub new_period_start: NaiveDate,
    pub new_period_end: NaiveDate,
}

impl RenewRequest {
    /// Validates the request against the asset being renewed.
    pub fn validate(&self, asset: &Asset) -> Result<(), TransactionError> {
        if asset.status != AssetStatus::Closed {
            return Err(TransactionError::AssetNotClosed(asset.id.clone()));
        }
        if !asset.kind.is_rental() {
            return Err(TransactionError::NotARental(asset.id.clone()));
        }
        if self.new_period_end <= self.new_period_start {
            return Err(TransactionError::EndDateNotAfterStart {
                start: self.new_period_start,
                end: self.new_period_end,
            });
        }
        Ok(())
    }
}

/// Input for a mid-contract rent readjustment. The contractual end date is
/// untouched; only the value changes from `effective_date` on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadjustRequest {
    pub new_value: Decimal,
    pub new_commission: Decimal,
    pub effective_date: NaiveDate,
}

impl ReadjustRequest {
    /// Validates the request against the asset being readjusted.
    pub fn validate(&self, asset: &Asset) -> Result<(), TransactionError> {
        if asset.status != AssetStatus::Closed {
            return Err(TransactionError::AssetNotClosed(asset.id.clone()));
        }
        if !asset.kind.is_rental() {
            return Err(TransactionError::NotARental(asset.id.clone()));
        }
        if let Some(closed_at) = asset.closed_at {
            if self.effective_date <= closed_at {
                return Err(TransactionError::EndDateNotAfterStart {
                    start: closed_at,
                    end: self.effective_date,
                });
            }
        }
        Ok(())
    }
}
