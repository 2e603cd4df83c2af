use std::cmp::Ordering;

use super::{CatalogIndex, SimilarityStore};

/// Hard cap on recommendations per request, matching the model contract
pub const MAX_RECOMMENDATIONS: usize = 15;

/// One ranked peer produced by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPeer {
    pub movie_id: i64,
    pub score: f32,
}

/// Failures inside the recommendation core
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The query id is not part of the recommendation model
    #[error("Movie {0} not found in the recommendation model")]
    UnknownMovie(i64),

    /// The immutable stores disagree on dimensions; a defect, not a client error
    #[error("Similarity row {position} missing for matrix dimension {dimension}")]
    StoreMismatch { position: usize, dimension: usize },
}

/// Returns the top-`k` peers of `movie_id` by similarity score.
///
/// Pairs every row position with its score, sorts by score descending with
/// ties broken by ascending position (the deterministic equivalent of a
/// stable sort over naturally ordered input), drops the entry whose identity
/// equals the query id, and maps the surviving positions back to movie ids.
///
/// Self-exclusion is by identity, never by rank: the diagonal is not trusted
/// to be the row maximum, so the query movie is filtered wherever it lands.
pub fn recommend(
    catalog: &CatalogIndex,
    similarity: &SimilarityStore,
    movie_id: i64,
    k: usize,
) -> Result<Vec<RankedPeer>, EngineError> {
    let position = catalog
        .resolve(movie_id)
        .ok_or(EngineError::UnknownMovie(movie_id))?;

    let scores = similarity
        .row(position)
        .ok_or(EngineError::StoreMismatch {
            position,
            dimension: similarity.dimension(),
        })?;

    let mut ranked: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let k = k.min(MAX_RECOMMENDATIONS);
    let mut peers = Vec::with_capacity(k.min(ranked.len()));
    for (peer_position, score) in ranked {
        if peers.len() == k {
            break;
        }

        let peer_id = catalog
            .identity_of(peer_position)
            .ok_or(EngineError::StoreMismatch {
                position: peer_position,
                dimension: similarity.dimension(),
            })?;

        if peer_id == movie_id {
            continue;
        }

        peers.push(RankedPeer {
            movie_id: peer_id,
            score,
        });
    }

    Ok(peers)
}
