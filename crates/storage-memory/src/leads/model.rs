//! Row model for leads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dealbook_core::leads::{Lead, LeadStatus};

/// The shape a lead document takes in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: LeadStatus,
    pub updated_at: DateTime<Utc>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            status: row.status,
            updated_at: row.updated_at,
        }
    }
}

impl From<Lead> for LeadRow {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            name: lead.name,
            phone: lead.phone,
            status: lead.status,
            updated_at: lead.updated_at,
        }
    }
}
