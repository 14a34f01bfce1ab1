//! Transactions module - the state machine governing closings,
//! reactivations, renewals, and readjustments.

mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;


// Re-export the public interface
pub use transactions_errors::TransactionError;
pub use transactions_model::{CloseOutcome, CloseRequest, ReadjustRequest, RenewRequest};
pub use transactions_service::TransactionService;
pub use transactions_traits::TransactionServiceTrait;
