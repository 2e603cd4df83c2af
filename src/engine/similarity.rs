use super::loader::ModelLoadError;

/// Immutable N×N matrix of precomputed pairwise similarity scores
///
/// Row `i` holds the similarity of catalog entry `i` against every catalog
/// entry, itself included. Scores are treated as opaque comparable reals:
/// no normalization or symmetry is assumed, and the diagonal is NOT assumed
/// to be the row maximum.
#[derive(Debug)]
pub struct SimilarityStore {
    rows: Vec<Vec<f32>>,
    dimension: usize,
}

impl SimilarityStore {
    /// Builds the store from a deserialized matrix, validating squareness.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, ModelLoadError> {
        let dimension = rows.len();
        for (row, scores) in rows.iter().enumerate() {
            if scores.len() != dimension {
                return Err(ModelLoadError::RaggedRow {
                    row,
                    expected: dimension,
                    found: scores.len(),
                });
            }
        }

        Ok(Self { rows, dimension })
    }

    /// The similarity row for a catalog position, exactly N scores long
    pub fn row(&self, position: usize) -> Option<&[f32]> {
        self.rows.get(position).map(Vec::as_slice)
    }

    /// Matrix dimension N
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_access() {
        let store = SimilarityStore::from_rows(vec![
            vec![1.0, 0.5],
            vec![0.5, 1.0],
        ])
        .unwrap();

        assert_eq!(store.dimension(), 2);
        assert_eq!(store.row(0), Some([1.0, 0.5].as_slice()));
        assert_eq!(store.row(1), Some([0.5, 1.0].as_slice()));
        assert_eq!(store.row(2), None);
    }

    #[test]
    fn test_ragged_matrix_is_rejected() {
        let result = SimilarityStore::from_rows(vec![
            vec![1.0, 0.5, 0.2],
            vec![0.5, 1.0],
            vec![0.2, 0.1, 1.0],
        ]);

        assert!(matches!(
            result,
            Err(ModelLoadError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        ));
    }

    #[test]
    fn test_empty_matrix_is_square() {
        let store = SimilarityStore::from_rows(vec![]).unwrap();
        assert_eq!(store.dimension(), 0);
        assert_eq!(store.row(0), None);
    }
}
