use std::collections::HashMap;

use serde::Deserialize;

use super::loader::ModelLoadError;

/// One row of the externally supplied catalog table, in matrix row order
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub movie_id: i64,
    pub original_title: String,
}

/// Immutable bidirectional mapping between movie ids and matrix row positions
///
/// Built once at startup and shared read-only across requests. Row positions
/// are dense and 0-based: the entry at index `i` of the source table owns
/// row `i` of the similarity matrix.
#[derive(Debug)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
    positions: HashMap<i64, usize>,
}

impl CatalogIndex {
    /// Builds the index from the raw (id, title) table in row order.
    ///
    /// Fails if the table is empty, contains a non-positive id, or maps the
    /// same id to more than one row.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, ModelLoadError> {
        if entries.is_empty() {
            return Err(ModelLoadError::EmptyCatalog);
        }

        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.movie_id <= 0 {
                return Err(ModelLoadError::InvalidId(entry.movie_id));
            }
            if positions.insert(entry.movie_id, position).is_some() {
                return Err(ModelLoadError::DuplicateId(entry.movie_id));
            }
        }

        Ok(Self { entries, positions })
    }

    /// Resolves a movie id to its matrix row position
    pub fn resolve(&self, movie_id: i64) -> Option<usize> {
        self.positions.get(&movie_id).copied()
    }

    /// Inverse lookup: the movie id owning a row position
    ///
    /// Total over `0..len()`; out-of-range positions return `None` so a
    /// corrupt store surfaces as an internal error instead of a panic.
    pub fn identity_of(&self, position: usize) -> Option<i64> {
        self.entries.get(position).map(|e| e.movie_id)
    }

    /// Number of catalog entries (the matrix dimension N)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the id is present in the recommendation model
    pub fn contains(&self, movie_id: i64) -> bool {
        self.positions.contains_key(&movie_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(movie_id: i64, title: &str) -> CatalogEntry {
        CatalogEntry {
            movie_id,
            original_title: title.to_string(),
        }
    }

    #[test]
    fn test_resolve_and_identity_are_inverse() {
        let index = CatalogIndex::from_entries(vec![
            entry(603, "The Matrix"),
            entry(27205, "Inception"),
            entry(157336, "Interstellar"),
        ])
        .unwrap();

        assert_eq!(index.len(), 3);
        for position in 0..index.len() {
            let movie_id = index.identity_of(position).unwrap();
            assert_eq!(index.resolve(movie_id), Some(position));
        }
        assert_eq!(index.resolve(27205), Some(1));
        assert_eq!(index.identity_of(1), Some(27205));
    }

    #[test]
    fn test_unknown_id_does_not_resolve() {
        let index = CatalogIndex::from_entries(vec![entry(603, "The Matrix")]).unwrap();
        assert_eq!(index.resolve(999999), None);
        assert!(!index.contains(999999));
    }

    #[test]
    fn test_out_of_range_position_has_no_identity() {
        let index = CatalogIndex::from_entries(vec![entry(603, "The Matrix")]).unwrap();
        assert_eq!(index.identity_of(5), None);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let result = CatalogIndex::from_entries(vec![
            entry(603, "The Matrix"),
            entry(603, "The Matrix Reloaded"),
        ]);
        assert!(matches!(result, Err(ModelLoadError::DuplicateId(603))));
    }

    #[test]
    fn test_non_positive_id_is_rejected() {
        let result = CatalogIndex::from_entries(vec![entry(0, "Broken")]);
        assert!(matches!(result, Err(ModelLoadError::InvalidId(0))));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = CatalogIndex::from_entries(vec![]);
        assert!(matches!(result, Err(ModelLoadError::EmptyCatalog)));
    }
}
