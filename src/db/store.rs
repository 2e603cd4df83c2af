use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{decode_providers, MovieRecord, MovieSummary};

/// Read-only access to the movie detail store
///
/// The trait seam keeps the request path testable with injected fixtures;
/// production wires in [`PgMovieStore`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Every catalog title ordered alphabetically, for the search dropdown
    async fn list_titles(&self) -> AppResult<Vec<MovieSummary>>;

    /// Full record for one movie, `None` when the id is unknown
    async fn find_movie(&self, movie_id: i64) -> AppResult<Option<MovieRecord>>;

    /// Full records for a set of ids. No ordering promise; callers that
    /// care about ranking order must restore it themselves.
    async fn find_movies(&self, movie_ids: &[i64]) -> AppResult<Vec<MovieRecord>>;
}

/// Raw row shape; the provider column stays JSON text until decoded here
#[derive(sqlx::FromRow)]
struct MovieRow {
    movie_id: i64,
    original_title: String,
    poster_path: Option<String>,
    watch_providers: Option<String>,
}

impl From<MovieRow> for MovieRecord {
    fn from(row: MovieRow) -> Self {
        MovieRecord {
            movie_id: row.movie_id,
            original_title: row.original_title,
            poster_path: row.poster_path,
            watch_providers: decode_providers(row.watch_providers.as_deref()),
        }
    }
}

/// PostgreSQL-backed movie detail store
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list_titles(&self) -> AppResult<Vec<MovieSummary>> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT movie_id, original_title FROM movies ORDER BY original_title ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(movie_id, original_title)| MovieSummary {
                movie_id,
                original_title,
            })
            .collect())
    }

    async fn find_movie(&self, movie_id: i64) -> AppResult<Option<MovieRecord>> {
        let row = sqlx::query_as::<_, MovieRow>(
            "SELECT movie_id, original_title, poster_path, watch_providers \
             FROM movies WHERE movie_id = $1",
        )
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MovieRecord::from))
    }

    async fn find_movies(&self, movie_ids: &[i64]) -> AppResult<Vec<MovieRecord>> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT movie_id, original_title, poster_path, watch_providers \
             FROM movies WHERE movie_id = ANY($1)",
        )
        .bind(movie_ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MovieRecord::from).collect())
    }
}
