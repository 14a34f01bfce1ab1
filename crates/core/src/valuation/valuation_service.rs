use log::debug;
use std::sync::Arc;

use chrono::NaiveDate;

use super::valuation_model::{effective_financials, EffectiveFinancials};
use super::valuation_traits::ValuationServiceTrait;
use crate::assets::AssetRepositoryTrait;
use crate::errors::Result;
use crate::ledger::{period_timeline, LedgerRepositoryTrait, Period};

/// Service answering "what is in force as of this date?" over the
/// repositories.
pub struct ValuationService {
    assets: Arc<dyn AssetRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
}

impl ValuationService {
    /// Creates a new ValuationService instance.
    pub fn new(
        assets: Arc<dyn AssetRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
    ) -> Self {
        Self { assets, ledger }
    }
}

impl ValuationServiceTrait for ValuationService {
    fn effective_financials(
        &self,
        asset_id: &str,
        reference_date: NaiveDate,
    ) -> Result<EffectiveFinancials> {
        let asset = self.assets.get_by_id(asset_id)?;
        let entries = self.ledger.list_by_asset(asset_id)?;
        let resolved = effective_financials(&asset, &entries, reference_date);
        debug!(
            "Effective financials for {} as of {}: {:?} from {:?}",
            asset_id, reference_date, resolved.value, resolved.source
        );
        Ok(resolved)
    }

    fn period_timeline(&self, asset_id: &str) -> Result<Vec<Period>> {
        let asset = self.assets.get_by_id(asset_id)?;
        let entries = self.ledger.list_by_asset(asset_id)?;
        Ok(period_timeline(&asset, &entries))
    }
}
