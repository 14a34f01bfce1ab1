//! Lead repository trait.

use async_trait::async_trait;

use super::leads_model::{Lead, LeadStatus};
use crate::errors::Result;

/// Trait defining the contract for Lead repository operations.
///
/// The engine never creates or deletes leads; it reads them for display and
/// advances their status as a closing side effect.
#[async_trait]
pub trait LeadRepositoryTrait: Send + Sync {
    /// Retrieves a lead by its ID.
    fn get_by_id(&self, lead_id: &str) -> Result<Lead>;

    /// Sets the lead's pipeline status and returns the updated lead.
    async fn update_status(&self, lead_id: &str, status: LeadStatus) -> Result<Lead>;
}
