//! Deck files: the on-disk TOML format for an assessment.
//!
//! A deck file carries the questions plus the variant configuration that
//! shapes the run (feedback policy, lock-window delay, band table, results
//! pass-throughs). Parsing and validation happen here; downstream code only
//! ever sees a validated [`LoadedDeck`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use attune_engine::QuizConfig;
use attune_types::{Band, BandTable, CtaLink, Deck, DeckError, FeedbackPolicy, Question};

/// The raw shape of a deck file.
#[derive(Debug, Deserialize)]
pub(crate) struct DeckFile {
    title: String,
    description: Option<String>,
    #[serde(default)]
    variant: FeedbackPolicy,
    /// Override the variant's conventional lock-window length.
    advance_delay_ms: Option<u64>,
    #[serde(default)]
    bands: Vec<Band>,
    cta: Option<CtaLink>,
    disclaimer: Option<String>,
    #[serde(default)]
    questions: Vec<Question>,
}

/// A parsed and validated deck, ready to run.
#[derive(Debug)]
pub struct LoadedDeck {
    pub title: String,
    pub description: Option<String>,
    pub deck: Deck,
    pub config: QuizConfig,
}

#[derive(Debug, Error)]
pub enum DeckParseError {
    #[error("failed to parse deck")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] DeckError),
}

#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error("failed to read deck file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse deck file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid deck in {}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: DeckError,
    },
}

/// Parse a deck document from a string (used for the embedded decks).
pub fn parse_deck(content: &str) -> Result<LoadedDeck, DeckParseError> {
    let file: DeckFile = toml::from_str(content)?;
    Ok(file.into_loaded()?)
}

/// Load and validate a deck file from disk.
pub fn load_deck(path: &Path) -> Result<LoadedDeck, DeckFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| DeckFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_deck(&content) {
        Ok(loaded) => Ok(loaded),
        Err(DeckParseError::Parse(source)) => Err(DeckFileError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(DeckParseError::Invalid(source)) => {
            tracing::warn!("Invalid deck in {:?}: {}", path, source);
            Err(DeckFileError::Invalid {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

impl DeckFile {
    fn into_loaded(self) -> Result<LoadedDeck, DeckError> {
        let deck = Deck::new(self.questions)?;
        let bands =
            BandTable::from_rules(self.bands).unwrap_or_else(|| default_bands(self.variant));

        let mut config = QuizConfig::new(self.variant, bands);
        if let Some(ms) = self.advance_delay_ms {
            config.advance_delay = Duration::from_millis(ms);
        }
        config.result_cta = self.cta;
        config.disclaimer = self.disclaimer;

        Ok(LoadedDeck {
            title: self.title,
            description: self.description,
            deck,
            config,
        })
    }
}

/// Band tables used when a deck file supplies none.
fn default_bands(variant: FeedbackPolicy) -> BandTable {
    let rules = match variant {
        FeedbackPolicy::Reveal => vec![
            band(100, "Perfect! You aced it."),
            band(51, "Nice work, you did well!"),
            band(0, "Keep practicing, you'll get it!"),
        ],
        FeedbackPolicy::Acknowledge => vec![
            band(80, "Strong relationship resilience"),
            band(50, "Moderate relationship resilience"),
            band(0, "Consider professional guidance; there is room to grow"),
        ],
    };
    BandTable::from_rules(rules).expect("default band tables are non-empty")
}

fn band(min_percent: u8, label: &str) -> Band {
    Band {
        min_percent,
        label: label.to_string(),
    }
}
