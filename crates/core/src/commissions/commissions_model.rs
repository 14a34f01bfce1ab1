//! Commission split domain model.
//!
//! A split expresses one beneficiary's share redundantly, as both a
//! percentage and a currency value. The editing operations keep the two in
//! step: editing the percentage recomputes the value, editing the value
//! recomputes the percentage. The list is only checked for summing to 100%
//! at save time, never while the user is mid-edit.
//!
//! All operations are free functions over the split list; state flows
//! through arguments, there is no ambient singleton.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::commissions_errors::SplitError;
use crate::constants::{
    DEFAULT_AGENCY_SPLIT_PCT, DEFAULT_SPLIT_TOLERANCE, FULL_DISTRIBUTION_PCT,
    PERSISTED_DECIMAL_PRECISION,
};

/// Who receives a share of the commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeneficiaryKind {
    #[default]
    Agency,
    Broker,
}

/// One beneficiary's share of a commission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSplit {
    pub beneficiary_kind: BeneficiaryKind,
    pub beneficiary_id: String,
    /// Display name, frozen at assignment time.
    pub beneficiary_name: String,
    /// Share in percentage points, 0-100.
    pub percentage: Decimal,
    /// Share as a currency amount.
    pub value: Decimal,
}

/// Validation policy for a split list. The tolerance is configuration, not
/// a hard constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPolicy {
    /// Allowed deviation of the percentage sum from 100, in points.
    pub tolerance: Decimal,
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SPLIT_TOLERANCE,
        }
    }
}

/// Sets an entry's percentage and recomputes its value from the total.
///
/// A zero total commission leaves the value untouched; there is nothing to
/// derive a value from.
pub fn set_by_percentage(
    splits: &mut [CommissionSplit],
    index: usize,
    percentage: Decimal,
    total_commission: Decimal,
) -> Result<(), SplitError> {
    let split = splits
        .get_mut(index)
        .ok_or(SplitError::IndexOutOfBounds(index))?;
    split.percentage = percentage;
    if !total_commission.is_zero() {
        split.value = total_commission * percentage / FULL_DISTRIBUTION_PCT;
    }
    Ok(())
}

/// Sets an entry's value and recomputes its percentage from the total.
///
/// A zero total commission leaves the percentage untouched.
pub fn set_by_value(
    splits: &mut [CommissionSplit],
    index: usize,
    value: Decimal,
    total_commission: Decimal,
) -> Result<(), SplitError> {
    let split = splits
        .get_mut(index)
        .ok_or(SplitError::IndexOutOfBounds(index))?;
    split.value = value;
    if !total_commission.is_zero() {
        split.percentage = value / total_commission * FULL_DISTRIBUTION_PCT;
    }
    Ok(())
}

/// Appends a zero-percentage entry for a beneficiary.
///
/// Rejects a beneficiary that already holds an entry, leaving the list
/// unchanged.
pub fn add_beneficiary(
    splits: &mut Vec<CommissionSplit>,
    kind: BeneficiaryKind,
    beneficiary_id: &str,
    beneficiary_name: &str,
) -> Result<(), SplitError> {
    if splits.iter().any(|s| s.beneficiary_id == beneficiary_id) {
        return Err(SplitError::DuplicateBeneficiary(beneficiary_id.to_string()));
    }
    splits.push(CommissionSplit {
        beneficiary_kind: kind,
        beneficiary_id: beneficiary_id.to_string(),
        beneficiary_name: beneficiary_name.to_string(),
        percentage: Decimal::ZERO,
        value: Decimal::ZERO,
    });
    Ok(())
}

/// Removes the entry at `index`. The remaining percentages are not
/// renormalized; the user redistributes them explicitly.
pub fn remove_beneficiary(
    splits: &mut Vec<CommissionSplit>,
    index: usize,
) -> Result<CommissionSplit, SplitError> {
    if index >= splits.len() {
        return Err(SplitError::IndexOutOfBounds(index));
    }
    Ok(splits.remove(index))
}

/// Whether the percentages sum to a full distribution within the policy
/// tolerance.
pub fn is_valid(splits: &[CommissionSplit], policy: &SplitPolicy) -> bool {
    let sum: Decimal = splits.iter().map(|s| s.percentage).sum();
    (sum - FULL_DISTRIBUTION_PCT).abs() <= policy.tolerance
}

/// Validates the list before persistence.
pub fn validate_for_save(splits: &[CommissionSplit], policy: &SplitPolicy) -> Result<(), SplitError> {
    if !is_valid(splits, policy) {
        let sum: Decimal = splits.iter().map(|s| s.percentage).sum();
        return Err(SplitError::PercentagesDoNotSum {
            sum,
            tolerance: policy.tolerance,
        });
    }
    Ok(())
}

/// Rounds every percentage and value to 2 decimal places, half away from
/// zero, so repeated edits cannot accumulate floating drift in the store.
pub fn normalize_for_persistence(splits: &mut [CommissionSplit]) {
    for split in splits.iter_mut() {
        split.percentage = split.percentage.round_dp_with_strategy(
            PERSISTED_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
        split.value = split.value.round_dp_with_strategy(
            PERSISTED_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
    }
}

/// Builds the default distribution for a newly closed sale.
///
/// Agency 50 / Broker 50 when both are known; Agency 100 when no broker is
/// involved.
pub fn default_splits(
    total_commission: Decimal,
    agency_id: &str,
    agency_name: &str,
    broker: Option<(&str, &str)>,
) -> Vec<CommissionSplit> {
    let mut splits = Vec::new();
    match broker {
        Some((broker_id, broker_name)) => {
            let broker_pct = FULL_DISTRIBUTION_PCT - DEFAULT_AGENCY_SPLIT_PCT;
            splits.push(CommissionSplit {
                beneficiary_kind: BeneficiaryKind::Agency,
                beneficiary_id: agency_id.to_string(),
                beneficiary_name: agency_name.to_string(),
                percentage: DEFAULT_AGENCY_SPLIT_PCT,
                value: total_commission * DEFAULT_AGENCY_SPLIT_PCT / FULL_DISTRIBUTION_PCT,
            });
            splits.push(CommissionSplit {
                beneficiary_kind: BeneficiaryKind::Broker,
                beneficiary_id: broker_id.to_string(),
                beneficiary_name: broker_name.to_string(),
                percentage: broker_pct,
                value: total_commission * broker_pct / FULL_DISTRIBUTION_PCT,
            });
        }
        None => {
            splits.push(CommissionSplit {
                beneficiary_kind: BeneficiaryKind::Agency,
                beneficiary_id: agency_id.to_string(),
                beneficiary_name: agency_name.to_string(),
                percentage: FULL_DISTRIBUTION_PCT,
                value: total_commission,
            });
        }
    }
    splits
}
