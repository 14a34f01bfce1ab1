//! Assets module - domain models and repository traits.

mod assets_model;
mod assets_traits;


// Re-export the public interface
pub use assets_model::{Asset, AssetStatus, ListingKind};
pub use assets_traits::AssetRepositoryTrait;
