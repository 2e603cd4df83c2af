use std::sync::Arc;

use crate::db::MovieStore;
use crate::engine::{CatalogIndex, SimilarityStore};

/// Shared application state
///
/// The catalog and similarity matrix are loaded once at startup and never
/// mutated, so they are shared across requests without locking. The store
/// is a trait object so tests can inject fixtures.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogIndex>,
    pub similarity: Arc<SimilarityStore>,
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(
        catalog: Arc<CatalogIndex>,
        similarity: Arc<SimilarityStore>,
        store: Arc<dyn MovieStore>,
    ) -> Self {
        Self {
            catalog,
            similarity,
            store,
        }
    }
}
