pub mod catalog;
pub mod loader;
pub mod recommend;
pub mod similarity;

pub use catalog::{CatalogEntry, CatalogIndex};
pub use loader::{load_models, ModelLoadError};
pub use recommend::{recommend, EngineError, RankedPeer, MAX_RECOMMENDATIONS};
pub use similarity::SimilarityStore;
