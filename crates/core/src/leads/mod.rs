//! Leads module - external collaborator referenced by closings.

mod leads_model;
mod leads_traits;


// Re-export the public interface
pub use leads_model::{display_name, Lead, LeadStatus};
pub use leads_traits::LeadRepositoryTrait;
