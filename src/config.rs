/// Optional user configuration
///
/// Read once at startup from `<config dir>/picture-gallery/config.json`.
/// Every field has a default, so the file may be absent or partial.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name used under the user's config and cache directories
pub const APP_DIR: &str = "picture-gallery";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// Width of one grid cell; the column count follows the window width
    pub grid_tile_width: f32,
    /// Height of the picture area of a card
    pub image_height: f32,
    /// Longest side of cached thumbnails, in pixels
    pub thumbnail_size: u32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            grid_tile_width: 150.0,
            image_height: 200.0,
            thumbnail_size: 512,
            window_width: 480.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Load the config from the default location.
    ///
    /// Falls back to defaults when the file is missing or unreadable.
    pub fn load() -> Self {
        let path = config_path();
        match Self::from_file(&path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("{}, using defaults", err);
                Self::default()
            }
        }
    }

    /// Parse a config file. A missing file is `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Where the config file is expected
pub fn config_path() -> PathBuf {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push(APP_DIR);
    path.push("config.json");
    path
}
