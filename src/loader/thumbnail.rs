use image::{imageops::FilterType, ImageFormat};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::LoadError;
use crate::config::APP_DIR;

/// Get the thumbnail cache directory
/// Returns ~/.cache/picture-gallery/thumbnails on Linux
pub fn default_cache_dir() -> PathBuf {
    let mut path = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push(APP_DIR);
    path.push("thumbnails");
    path
}

/// Where the thumbnail for `url` lives (doesn't generate, just returns the expected path)
pub fn thumbnail_path(cache_dir: &Path, url: &str) -> PathBuf {
    let digest = Sha256::digest(url.as_bytes());
    cache_dir.join(format!("{:x}.jpg", digest))
}

/// Decode `data`, shrink it to fit in a `size` square and save it as JPEG at `path`.
///
/// The file is written next to `path` first and renamed into place, so a
/// half-written thumbnail is never picked up as a cache hit.
pub fn save_thumbnail(data: &[u8], size: u32, path: &Path) -> Result<(), LoadError> {
    let img = image::load_from_memory(data)?;

    let thumbnail = if img.width() > size || img.height() > size {
        img.resize(size, size, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEG has no alpha channel
    let partial = path.with_extension("part");
    let written = thumbnail
        .to_rgb8()
        .save_with_format(&partial, ImageFormat::Jpeg)
        .map_err(LoadError::from)
        .and_then(|()| fs::rename(&partial, path).map_err(LoadError::from));

    if written.is_err() {
        let _ = fs::remove_file(&partial);
    }
    written
}

/// Whether a cached thumbnail still has a readable image header
pub fn is_readable(path: &Path) -> bool {
    image::image_dimensions(path).is_ok()
}
