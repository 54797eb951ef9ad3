//! Shared fixtures for the integration suite.

use attune_engine::{App, QuizConfig};
use attune_types::{AnswerOption, Band, BandTable, Deck, FeedbackPolicy, Question, UiOptions};

/// Build a question with the given options; `correct` marks one index.
pub fn question(id: u32, prompt: &str, options: &[&str], correct: Option<usize>) -> Question {
    Question {
        id,
        category: None,
        prompt: prompt.to_string(),
        options: options
            .iter()
            .enumerate()
            .map(|(i, text)| AnswerOption::new(*text, correct == Some(i)))
            .collect(),
    }
}

/// Three questions, each with the correct option at index 0.
pub fn three_question_deck() -> Deck {
    Deck::new(vec![
        question(1, "First question?", &["right", "wrong"], Some(0)),
        question(2, "Second question?", &["right", "wrong"], Some(0)),
        question(3, "Third question?", &["right", "wrong"], Some(0)),
    ])
    .expect("fixture deck is valid")
}

/// The 80/50 tier table from the resilience variant.
pub fn tier_table() -> BandTable {
    BandTable::from_rules(vec![
        Band {
            min_percent: 80,
            label: "strong".to_string(),
        },
        Band {
            min_percent: 50,
            label: "moderate".to_string(),
        },
        Band {
            min_percent: 0,
            label: "needs attention".to_string(),
        },
    ])
    .expect("tier table is non-empty")
}

pub fn acknowledge_config() -> QuizConfig {
    QuizConfig::new(FeedbackPolicy::Acknowledge, tier_table())
}

pub fn test_app() -> App {
    App::new(
        "Fixture Quiz",
        Some("A fixture.".to_string()),
        three_question_deck(),
        acknowledge_config(),
        UiOptions::default(),
    )
}
