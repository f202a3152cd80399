/// Remote picture loading
///
/// This module handles:
/// - Fetching picture URLs over HTTP
/// - Downsizing them to display thumbnails
/// - Caching thumbnails to disk, keyed by URL

pub mod thumbnail;

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} answered with {status}")]
    Status { status: StatusCode, url: String },
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("thumbnail task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Fetches pictures and turns them into cached thumbnails.
///
/// Cloning is cheap; the HTTP client shares its connection pool.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    client: reqwest::Client,
    cache_dir: PathBuf,
    thumbnail_size: u32,
}

impl ImageLoader {
    pub fn new(cache_dir: PathBuf, thumbnail_size: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache_dir,
            thumbnail_size,
        }
    }

    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Return the cached thumbnail for `url`, downloading it on a miss.
    pub async fn load(self, url: String) -> Result<PathBuf, LoadError> {
        let path = thumbnail::thumbnail_path(&self.cache_dir, &url);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            let cached = path.clone();
            if tokio::task::spawn_blocking(move || thumbnail::is_readable(&cached)).await? {
                tracing::debug!(%url, "thumbnail cache hit");
                return Ok(path);
            }
            // Unreadable cache entry: drop it and fetch again
            tracing::warn!(%url, path = %path.display(), "discarding unreadable thumbnail");
            tokio::fs::remove_file(&path).await?;
        }

        tokio::fs::create_dir_all(&self.cache_dir).await?;

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { status, url });
        }
        let bytes = response.bytes().await?;
        tracing::debug!(%url, bytes = bytes.len(), "downloaded picture");

        // Decoding and resizing are CPU-bound
        let size = self.thumbnail_size;
        let target = path.clone();
        tokio::task::spawn_blocking(move || thumbnail::save_thumbnail(&bytes, size, &target))
            .await??;

        tracing::info!(%url, path = %path.display(), "cached thumbnail");
        Ok(path)
    }
}
