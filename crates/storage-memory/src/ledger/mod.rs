mod model;
mod repository;

pub use model::LedgerEntryRow;
pub use repository::LedgerRepository;
