//! Transaction error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by the transaction state machine.
///
/// Precondition failures are raised synchronously, before any store access.
/// `PartiallyApplied` is the one post-store error: it names what committed
/// and what did not when the second write of a two-write operation fails.
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Asset {0} is not active")]
    AssetNotActive(String),

    #[error("Asset {0} is not closed")]
    AssetNotClosed(String),

    #[error("Asset {0} is not a rental")]
    NotARental(String),

    #[error("A closing with a counterparty requires a responsible agent")]
    MissingClosingAgent,

    #[error("Closing a rental requires a period start and end date")]
    MissingPeriodDates,

    #[error("End date {end} must be after start date {start}")]
    EndDateNotAfterStart { start: NaiveDate, end: NaiveDate },

    #[error("Operation partially applied: {committed} committed, {failed} failed: {reason}")]
    PartiallyApplied {
        committed: &'static str,
        failed: &'static str,
        reason: String,
    },
}
