//! Core error types for the Dealbook engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by the storage layer.

use thiserror::Error;

use crate::commissions::SplitError;
use crate::transactions::TransactionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger engine.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Commission split error: {0}")]
    Split(#[from] SplitError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for record store operations.
///
/// All variants carry detail as `String`, allowing the storage layer to
/// convert its own errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A store query failed to execute.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A deletion was blocked because another record still references the id.
    #[error("Deletion blocked by referential constraint: {0}")]
    ReferentialConstraint(String),

    /// An update or delete was attempted on an append-only record.
    #[error("Record is immutable: {0}")]
    ImmutableRecord(String),

    /// A stored document could not be coerced into its typed row model.
    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

/// Validation errors for operation inputs.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),
}
