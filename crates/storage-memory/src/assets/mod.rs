mod model;
mod repository;

pub use model::AssetRow;
pub use repository::AssetRepository;
