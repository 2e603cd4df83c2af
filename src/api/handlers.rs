use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::engine::{self, MAX_RECOMMENDATIONS};
use crate::error::{AppError, AppResult};
use crate::models::{MovieRecord, MovieSummary};
use crate::services::{assemble, split_by_dominant_platform, RecommendationResponse};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    /// Requested result count; defaults to 15 and is capped at 15
    pub count: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Lists every catalog title, alphabetically, for the search dropdown
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<MovieSummary>>> {
    let titles = state.store.list_titles().await?;
    Ok(Json(titles))
}

/// Full detail for one movie, with its provider payload decoded
pub async fn movie_details(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<MovieRecord>> {
    let movie = state
        .store
        .find_movie(movie_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {movie_id} not found")))?;

    Ok(Json(movie))
}

/// The core flow: rank peers, enrich them from the detail store, and
/// partition the result around the dominant streaming platform
pub async fn recommendations(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<RecommendationResponse>> {
    let k = params.count.unwrap_or(MAX_RECOMMENDATIONS);

    let peers = engine::recommend(&state.catalog, &state.similarity, movie_id, k)?;
    if peers.is_empty() {
        return Err(AppError::NotFound(
            "No recommendations could be produced".to_string(),
        ));
    }

    let peer_ids: Vec<i64> = peers.iter().map(|p| p.movie_id).collect();
    let records = state.store.find_movies(&peer_ids).await?;

    // The bulk fetch makes no ordering promise; restore ranking order and
    // drop ids the detail store no longer carries.
    let mut by_id: HashMap<i64, MovieRecord> =
        records.into_iter().map(|r| (r.movie_id, r)).collect();
    let ranked: Vec<MovieRecord> = peer_ids.iter().filter_map(|id| by_id.remove(id)).collect();

    tracing::debug!(
        movie_id,
        ranked = ranked.len(),
        requested = k,
        "Enriched recommendation set"
    );

    let split = split_by_dominant_platform(ranked);
    Ok(Json(assemble(split)))
}
