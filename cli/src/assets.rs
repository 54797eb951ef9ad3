//! Embedded default decks.
//!
//! Shipped so the binary runs out of the box; a deck path on the command line
//! or a `deck` entry in the config overrides these.

use attune_config::{DeckParseError, LoadedDeck, parse_deck};

const TRIVIA: &str = include_str!("../decks/trivia.toml");
const RESILIENCE: &str = include_str!("../decks/resilience.toml");

/// Deck used when nothing is selected.
pub const DEFAULT_DECK: &str = "resilience";

/// Names accepted as a deck selector, for the startup error message.
pub const NAMES: &[&str] = &["resilience", "trivia"];

/// Parse a bundled deck by name. `None` if the name is not bundled.
pub fn builtin(name: &str) -> Option<Result<LoadedDeck, DeckParseError>> {
    let content = match name {
        "trivia" => Some(TRIVIA),
        "resilience" => Some(RESILIENCE),
        _ => None,
    }?;
    Some(parse_deck(content))
}
