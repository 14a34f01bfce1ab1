//! Transaction service trait.

use async_trait::async_trait;

use super::transactions_model::{CloseOutcome, CloseRequest, ReadjustRequest, RenewRequest};
use crate::assets::Asset;
use crate::commissions::CommissionSplit;
use crate::errors::Result;

/// Trait defining the contract for the transaction state machine.
///
/// Every operation validates synchronously, then performs one or two store
/// writes. Operations take ids and request payloads; all entity state flows
/// through the repositories.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Closes an active asset (sale or rental). With a counterparty lead,
    /// the lead is advanced to its terminal status as a second write.
    async fn close(&self, asset_id: &str, request: CloseRequest) -> Result<CloseOutcome>;

    /// Puts a closed asset back on the market, clearing its period fields.
    async fn reactivate(&self, asset_id: &str) -> Result<Asset>;

    /// Renews a rented asset into a new period, archiving the current one.
    async fn renew(&self, asset_id: &str, request: RenewRequest) -> Result<Asset>;

    /// Readjusts the rent mid-contract, keeping the contractual end date.
    async fn readjust(&self, asset_id: &str, request: ReadjustRequest) -> Result<Asset>;

    /// Replaces the asset's commission distribution as a whole list, after
    /// validating and normalizing it.
    async fn save_splits(&self, asset_id: &str, splits: Vec<CommissionSplit>) -> Result<Asset>;
}
