//! Commission split error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while editing or validating a split list.
#[derive(Error, Debug)]
pub enum SplitError {
    /// The beneficiary already holds a split entry.
    #[error("Beneficiary {0} already has a split entry")]
    DuplicateBeneficiary(String),

    /// The index does not address an entry in the list.
    #[error("No split entry at index {0}")]
    IndexOutOfBounds(usize),

    /// The percentages do not add up to a full distribution.
    #[error("Split percentages sum to {sum}%, expected 100% within {tolerance} points")]
    PercentagesDoNotSum { sum: Decimal, tolerance: Decimal },
}
