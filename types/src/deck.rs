//! Question decks and their validation.
//!
//! A [`Deck`] is validated once at construction; every other layer operates on
//! the guarantee that it is non-empty and that every question has at least one
//! option. You cannot create an invalid `Deck`.

use serde::Deserialize;
use thiserror::Error;

/// A single answer choice.
///
/// `correct` is grading metadata, not a judgment: an option without the flag
/// is ungraded rather than wrong, and never contributes to the score.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// One question in a deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    /// Unique, stable handle. Not required to be contiguous.
    pub id: u32,
    /// Display-only section label (e.g. "Personality").
    #[serde(default)]
    pub category: Option<String>,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Index of the first option flagged correct, if any.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| opt.correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck must contain at least one question")]
    Empty,
    #[error("question {id} has no options")]
    NoOptions { id: u32 },
    #[error("duplicate question id {id}")]
    DuplicateId { id: u32 },
}

/// An ordered, validated sequence of questions.
///
/// Order is authoritative: it defines presentation order and is never
/// reordered or shuffled downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    questions: Vec<Question>,
}

impl Deck {
    /// Validate a question list into a deck.
    ///
    /// This is the single validation gate: non-empty deck, non-empty option
    /// lists, unique ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, DeckError> {
        if questions.is_empty() {
            return Err(DeckError::Empty);
        }
        for (i, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(DeckError::NoOptions { id: question.id });
            }
            if questions[..i].iter().any(|prior| prior.id == question.id) {
                return Err(DeckError::DuplicateId { id: question.id });
            }
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false: emptiness is unrepresentable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
