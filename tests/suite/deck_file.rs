//! Deck file loading through the config crate.

use std::time::Duration;

use attune_config::{DeckFileError, load_deck, parse_deck};
use attune_types::FeedbackPolicy;

const RESILIENCE_STYLE_DECK: &str = r#"
title = "Marriage Survival Test"
description = "A short, private quiz."
variant = "acknowledge"
disclaimer = "Not for emergencies."

[cta]
label = "Explore Resources"
href = "/resources"

[[questions]]
id = 1
category = "Personality"
prompt = "We resolve disagreements by..."
options = [
    { text = "Talking calmly", correct = true },
    { text = "Shouting or stonewalling" },
    { text = "Avoiding the topic" },
]

[[questions]]
id = 2
category = "Relationship Exposure"
prompt = "How often do you spend quality time together weekly?"
options = [
    { text = "Several times a week", correct = true },
    { text = "Once a week" },
    { text = "Rarely" },
]
"#;

#[test]
fn deck_file_round_trips_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("resilience.toml");
    std::fs::write(&path, RESILIENCE_STYLE_DECK).expect("write deck");

    let loaded = load_deck(&path).expect("deck loads");
    assert_eq!(loaded.title, "Marriage Survival Test");
    assert_eq!(loaded.deck.len(), 2);
    assert_eq!(loaded.config.feedback, FeedbackPolicy::Acknowledge);
    assert_eq!(
        loaded.config.result_cta.as_ref().map(|cta| cta.label.as_str()),
        Some("Explore Resources")
    );
    assert_eq!(loaded.config.disclaimer.as_deref(), Some("Not for emergencies."));
}

#[test]
fn categories_and_order_survive_parsing() {
    let loaded = parse_deck(RESILIENCE_STYLE_DECK).expect("deck parses");
    let first = loaded.deck.question(0).expect("first question");
    assert_eq!(first.id, 1);
    assert_eq!(first.category.as_deref(), Some("Personality"));
    assert_eq!(first.options.len(), 3);
    // Deck order is authoritative, never shuffled.
    assert_eq!(loaded.deck.question(1).map(|q| q.id), Some(2));
}

#[test]
fn delay_override_wins_over_the_variant_default() {
    let content = r#"
title = "Slow quiz"
advance_delay_ms = 5000

[[questions]]
id = 1
prompt = "?"
options = [{ text = "a" }]
"#;
    let loaded = parse_deck(content).expect("deck parses");
    assert_eq!(loaded.config.advance_delay, Duration::from_millis(5000));
}

#[test]
fn unreadable_and_malformed_files_report_distinct_errors() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        load_deck(&missing),
        Err(DeckFileError::Read { .. })
    ));

    let malformed = dir.path().join("malformed.toml");
    std::fs::write(&malformed, "title = ").expect("write file");
    assert!(matches!(
        load_deck(&malformed),
        Err(DeckFileError::Parse { .. })
    ));

    let empty = dir.path().join("empty.toml");
    std::fs::write(&empty, "title = \"Empty\"").expect("write file");
    assert!(matches!(
        load_deck(&empty),
        Err(DeckFileError::Invalid { .. })
    ));
}
