//! Valuation module - resolves which period's financials are actually in
//! force on a given reference date.

mod valuation_model;
mod valuation_service;
mod valuation_traits;


// Re-export the public interface
pub use valuation_model::{effective_financials, EffectiveFinancials, EffectiveSource};
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;
