mod model;
mod repository;

pub use model::LeadRow;
pub use repository::LeadRepository;
