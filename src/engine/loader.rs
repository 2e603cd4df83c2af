use std::path::Path;

use reqwest::Client as HttpClient;

use super::catalog::{CatalogEntry, CatalogIndex};
use super::similarity::SimilarityStore;
use crate::config::Config;

/// Fatal startup failures while acquiring or validating the model blobs
///
/// Any of these must abort the process before the listener binds; the
/// service never serves traffic over a missing or corrupt model.
#[derive(thiserror::Error, Debug)]
pub enum ModelLoadError {
    #[error("Model file {path} is missing and no download URL is configured")]
    MissingFile { path: String },

    #[error("Failed to download model blob: {0}")]
    Download(#[from] reqwest::Error),

    #[error("I/O error while loading model: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed model file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Catalog contains non-positive movie id {0}")]
    InvalidId(i64),

    #[error("Catalog maps movie id {0} to more than one row")]
    DuplicateId(i64),

    #[error("Similarity row {row} has {found} scores, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Catalog has {catalog} entries but similarity matrix has {matrix} rows")]
    DimensionMismatch { catalog: usize, matrix: usize },
}

/// Loads, validates, and cross-checks the two model blobs.
///
/// Each blob is read from its configured path, fetched first via its
/// download URL when the file does not exist yet (first boot on a fresh
/// host). The catalog and matrix must agree on dimension N.
pub async fn load_models(
    config: &Config,
) -> Result<(CatalogIndex, SimilarityStore), ModelLoadError> {
    let client = HttpClient::new();

    let catalog_bytes = acquire_blob(
        &client,
        &config.catalog_path,
        config.catalog_url.as_deref(),
    )
    .await?;
    let similarity_bytes = acquire_blob(
        &client,
        &config.similarity_path,
        config.similarity_url.as_deref(),
    )
    .await?;

    let entries: Vec<CatalogEntry> =
        serde_json::from_slice(&catalog_bytes).map_err(|source| ModelLoadError::Malformed {
            path: config.catalog_path.clone(),
            source,
        })?;
    let rows: Vec<Vec<f32>> =
        serde_json::from_slice(&similarity_bytes).map_err(|source| ModelLoadError::Malformed {
            path: config.similarity_path.clone(),
            source,
        })?;

    let catalog = CatalogIndex::from_entries(entries)?;
    let similarity = SimilarityStore::from_rows(rows)?;

    if catalog.len() != similarity.dimension() {
        return Err(ModelLoadError::DimensionMismatch {
            catalog: catalog.len(),
            matrix: similarity.dimension(),
        });
    }

    tracing::info!(
        entries = catalog.len(),
        "Recommendation model loaded"
    );

    Ok((catalog, similarity))
}

/// Reads a model blob from disk, downloading it first if absent
async fn acquire_blob(
    client: &HttpClient,
    path: &str,
    url: Option<&str>,
) -> Result<Vec<u8>, ModelLoadError> {
    if !Path::new(path).exists() {
        let url = url.ok_or_else(|| ModelLoadError::MissingFile {
            path: path.to_string(),
        })?;
        download_blob(client, url, path).await?;
    }

    Ok(tokio::fs::read(path).await?)
}

/// Fetches a blob over HTTP and persists it next to the binary
async fn download_blob(client: &HttpClient, url: &str, path: &str) -> Result<(), ModelLoadError> {
    tracing::info!(url = %url, path = %path, "Downloading model blob");

    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    if let Some(parent) = Path::new(path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &bytes).await?;

    tracing::info!(path = %path, size = bytes.len(), "Model blob downloaded");

    Ok(())
}
