//! Lead domain models.
//!
//! Leads are owned by the CRM subsystem; this engine reads display data and
//! advances a lead to its terminal status when a closing names it as the
//! counterparty.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use super::leads_traits::LeadRepositoryTrait;
use crate::constants::UNRESOLVED_NAME_PLACEHOLDER;

/// Pipeline status of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Negotiating,
    /// Terminal: the lead bought or rented.
    Closed,
    /// Terminal: the lead walked away.
    Lost,
}

impl LeadStatus {
    /// Whether the status ends the pipeline.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeadStatus::Closed | LeadStatus::Lost)
    }
}

/// Domain model representing a lead.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub status: LeadStatus,
    pub updated_at: DateTime<Utc>,
}

/// Resolves a lead's display name for UI enrichment.
///
/// Lookup failures degrade to a placeholder instead of failing the caller;
/// display enrichment must never block an operation.
pub fn display_name(leads: &dyn LeadRepositoryTrait, lead_id: &str) -> String {
    match leads.get_by_id(lead_id) {
        Ok(lead) => lead.name,
        Err(err) => {
            warn!("Could not resolve display name for lead {}: {}", lead_id, err);
            UNRESOLVED_NAME_PLACEHOLDER.to_string()
        }
    }
}
