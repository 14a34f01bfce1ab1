use log::{debug, warn};
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::transactions_errors::TransactionError;
use super::transactions_model::{CloseOutcome, CloseRequest, ReadjustRequest, RenewRequest};
use super::transactions_traits::TransactionServiceTrait;
use crate::assets::{Asset, AssetRepositoryTrait, AssetStatus};
use crate::commissions::{
    normalize_for_persistence, validate_for_save, CommissionSplit, SplitPolicy,
};
use crate::errors::Result;
use crate::leads::{LeadRepositoryTrait, LeadStatus};
use crate::ledger::{LedgerKind, LedgerRepositoryTrait, NewLedgerEntry};
use crate::utils::time_utils::business_date_today;

/// Service implementing the transaction state machine.
///
/// Each operation is one or two store writes. Two-write operations commit
/// in a fixed order and surface `TransactionError::PartiallyApplied` when
/// the second write fails after the first succeeded; nothing is retried or
/// auto-corrected here.
pub struct TransactionService {
    assets: Arc<dyn AssetRepositoryTrait>,
    leads: Arc<dyn LeadRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    split_policy: SplitPolicy,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(
        assets: Arc<dyn AssetRepositoryTrait>,
        leads: Arc<dyn LeadRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        split_policy: SplitPolicy,
    ) -> Self {
        Self {
            assets,
            leads,
            ledger,
            split_policy,
        }
    }

    /// Archives the asset's current period to the ledger.
    async fn archive_current_period(&self, asset: &Asset, period_end: NaiveDate) -> Result<()> {
        let period_start = match asset.closed_at {
            Some(closed_at) => closed_at,
            None => return Err(TransactionError::MissingPeriodDates.into()),
        };
        let entry = NewLedgerEntry {
            asset_id: asset.id.clone(),
            kind: LedgerKind::Rental,
            value: asset.period_value,
            commission: asset.period_commission,
            period_start,
            period_end,
        };
        entry.validate()?;
        self.ledger.append(entry).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn close(&self, asset_id: &str, request: CloseRequest) -> Result<CloseOutcome> {
        debug!("Closing asset {}", asset_id);
        let mut asset = self.assets.get_by_id(asset_id)?;
        request.validate(&asset)?;

        let external = request.counterparty_lead_id.is_none();
        asset.status = AssetStatus::Closed;
        asset.closed_at = Some(request.period_start.unwrap_or_else(business_date_today));
        asset.counterparty_lead_id = request.counterparty_lead_id.clone();
        asset.closed_by_user_id = request.closed_by_user_id.clone();
        asset.period_end_date = request.period_end_date;
        if external {
            // Brokered by a third party: inventory record only, no money
            // flows through this agency.
            asset.period_value = Decimal::ZERO;
            asset.period_commission = Decimal::ZERO;
        } else {
            asset.period_value = request.period_value;
            asset.period_commission = request.commission_amount;
        }
        // Any splits from a previous closing are stale now.
        asset.commission_splits.clear();

        let asset = self.assets.update(asset).await?;

        let lead = match &request.counterparty_lead_id {
            Some(lead_id) => {
                match self.leads.update_status(lead_id, LeadStatus::Closed).await {
                    Ok(lead) => Some(lead),
                    Err(err) => {
                        warn!(
                            "Asset {} closed but lead {} was not advanced: {}",
                            asset_id, lead_id, err
                        );
                        return Err(TransactionError::PartiallyApplied {
                            committed: "asset",
                            failed: "lead",
                            reason: err.to_string(),
                        }
                        .into());
                    }
                }
            }
            None => None,
        };

        Ok(CloseOutcome { asset, lead })
    }

    async fn reactivate(&self, asset_id: &str) -> Result<Asset> {
        debug!("Reactivating asset {}", asset_id);
        let mut asset = self.assets.get_by_id(asset_id)?;
        if asset.status != AssetStatus::Closed {
            return Err(TransactionError::AssetNotClosed(asset.id).into());
        }

        // Archive the abandoned period so the revenue history stays
        // walkable. Only rentals that actually collected rent qualify:
        // sales keep no period history, external closings carry no money,
        // and a future-dated period never started.
        let today = business_date_today();
        let started = asset
            .closed_at
            .map(|closed_at| closed_at <= today)
            .unwrap_or(false);
        let archived = asset.kind.is_rental() && asset.period_value > Decimal::ZERO && started;
        if archived {
            self.archive_current_period(&asset, today).await?;
        }

        asset.status = AssetStatus::Active;
        asset.closed_at = None;
        asset.counterparty_lead_id = None;
        asset.closed_by_user_id = None;
        asset.period_value = Decimal::ZERO;
        asset.period_commission = Decimal::ZERO;
        asset.period_end_date = None;
        asset.commission_splits.clear();

        let updated = self.assets.update(asset).await;
        if archived {
            // The ledger append already committed; a failed asset write
            // leaves the operation half done.
            updated.map_err(|err| {
                TransactionError::PartiallyApplied {
                    committed: "ledger entry",
                    failed: "asset",
                    reason: err.to_string(),
                }
                .into()
            })
        } else {
            updated
        }
    }

    async fn renew(&self, asset_id: &str, request: RenewRequest) -> Result<Asset> {
        debug!(
            "Renewing asset {} into period starting {}",
            asset_id, request.new_period_start
        );
        let mut asset = self.assets.get_by_id(asset_id)?;
        request.validate(&asset)?;

        // Close out the old period exactly where the new one begins; this
        // link is what keeps the chain walkable.
        self.archive_current_period(&asset, request.new_period_start)
            .await?;

        asset.period_value = request.new_value;
        asset.period_commission = request.new_commission;
        asset.closed_at = Some(request.new_period_start);
        asset.period_end_date = Some(request.new_period_end);

        self.assets.update(asset).await.map_err(|err| {
            TransactionError::PartiallyApplied {
                committed: "ledger entry",
                failed: "asset",
                reason: err.to_string(),
            }
            .into()
        })
    }

    async fn readjust(&self, asset_id: &str, request: ReadjustRequest) -> Result<Asset> {
        debug!(
            "Readjusting asset {} effective {}",
            asset_id, request.effective_date
        );
        let mut asset = self.assets.get_by_id(asset_id)?;
        request.validate(&asset)?;

        self.archive_current_period(&asset, request.effective_date)
            .await?;

        let audit_line = format!(
            "{}: rent readjusted from {} to {}, effective {}",
            business_date_today(),
            asset.period_value,
            request.new_value,
            request.effective_date
        );
        asset.notes = Some(match asset.notes.take() {
            Some(notes) => format!("{}\n{}", notes, audit_line),
            None => audit_line,
        });

        asset.period_value = request.new_value;
        asset.period_commission = request.new_commission;
        asset.closed_at = Some(request.effective_date);
        // The contractual end date is untouched by a readjustment.

        self.assets.update(asset).await.map_err(|err| {
            TransactionError::PartiallyApplied {
                committed: "ledger entry",
                failed: "asset",
                reason: err.to_string(),
            }
            .into()
        })
    }

    async fn save_splits(&self, asset_id: &str, splits: Vec<CommissionSplit>) -> Result<Asset> {
        debug!("Saving {} commission splits for asset {}", splits.len(), asset_id);
        let mut asset = self.assets.get_by_id(asset_id)?;
        if asset.status != AssetStatus::Closed {
            return Err(TransactionError::AssetNotClosed(asset.id).into());
        }

        validate_for_save(&splits, &self.split_policy)?;

        let mut splits = splits;
        normalize_for_persistence(&mut splits);
        asset.commission_splits = splits;

        self.assets.update(asset).await
    }
}
