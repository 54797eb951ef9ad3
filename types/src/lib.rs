//! Core domain types for Attune.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod deck;
mod score;

pub use deck::{AnswerOption, Deck, DeckError, Question};
pub use score::{AnswerSheet, Band, BandTable, ScoreSummary, percent_of, summarize};

use serde::Deserialize;

/// How a quiz acknowledges an accepted selection.
///
/// The feedback text is transient and advisory; it is shown during the lock
/// window and discarded on advance, never persisted or scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPolicy {
    /// Reveal correctness: "Correct!" or the right answer on a miss.
    Reveal,
    /// Neutral acknowledgment regardless of correctness.
    #[default]
    Acknowledge,
}

/// An opaque call-to-action shown on the results screen.
///
/// Both fields pass through from the deck to the renderer uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtaLink {
    pub label: String,
    pub href: String,
}

/// Presentation toggles threaded from config to the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    /// Use a high-contrast color palette.
    pub high_contrast: bool,
    /// Use ASCII-only glyphs for markers and separators.
    pub ascii_only: bool,
}
