//! Ledger module - append-only history of past contractual periods.

mod ledger_model;
mod ledger_traits;


// Re-export the public interface
pub use ledger_model::{period_timeline, LedgerEntry, LedgerKind, NewLedgerEntry, Period};
pub use ledger_traits::LedgerRepositoryTrait;
