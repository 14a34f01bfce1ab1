//! Valuation service trait.

use chrono::NaiveDate;

use super::valuation_model::EffectiveFinancials;
use crate::errors::Result;
use crate::ledger::Period;

/// Trait defining the contract for valuation queries.
///
/// All queries are reads; the service never writes.
pub trait ValuationServiceTrait: Send + Sync {
    /// Resolves the financials in force for an asset on a reference date.
    fn effective_financials(
        &self,
        asset_id: &str,
        reference_date: NaiveDate,
    ) -> Result<EffectiveFinancials>;

    /// Returns the asset's full contractual history, newest period first.
    fn period_timeline(&self, asset_id: &str) -> Result<Vec<Period>>;
}
