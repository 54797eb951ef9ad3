//! Configuration loading for Attune.
//!
//! App configuration lives at `~/.attune/config.toml`; deck files are
//! standalone TOML documents loaded through [`deck`].

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use attune_types::UiOptions;

mod deck;

pub use deck::{DeckFileError, DeckParseError, LoadedDeck, load_deck, parse_deck};

#[derive(Debug, Default, Deserialize)]
pub struct AttuneConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Deck to run: a path to a deck file, or the name of a bundled deck.
    pub deck: Option<String>,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Use ASCII-only glyphs for markers and separators.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl AttuneConfig {
    /// Load the config file if one exists. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            high_contrast: app.is_some_and(|app| app.high_contrast),
            ascii_only: app.is_some_and(|app| app.ascii_only),
        }
    }

    #[must_use]
    pub fn deck_selector(&self) -> Option<&str> {
        self.app.as_ref()?.deck.as_deref()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".attune").join("config.toml"))
}
