use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
///
/// CORS is permissive: the API is consumed by a browser frontend served
/// from a different origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog listing for the search dropdown
        .route("/api/movies", get(handlers::list_movies))
        // Single movie detail view
        .route("/api/movies/:movie_id", get(handlers::movie_details))
        // Recommendations partitioned by dominant platform
        .route(
            "/api/recommendations/:movie_id",
            get(handlers::recommendations),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
