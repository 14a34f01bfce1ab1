//! Asset repository trait.
//!
//! Defines the contract for asset persistence without any storage-specific
//! types, allowing for different store implementations.

use async_trait::async_trait;

use super::assets_model::{Asset, AssetStatus};
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
///
/// Assets are created by the listings subsystem; this engine only reads and
/// updates them, so the trait carries no `create`.
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Retrieves an asset by its ID.
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;

    /// Lists assets, optionally filtered by status.
    fn list(&self, status: Option<AssetStatus>) -> Result<Vec<Asset>>;

    /// Persists the given asset state.
    ///
    /// The write is all-or-nothing: on error the stored record is
    /// unchanged and the in-memory state must not be considered committed.
    async fn update(&self, asset: Asset) -> Result<Asset>;
}
