//! The quiz flow state machine.
//!
//! One engine, parameterized by [`QuizConfig`], runs every assessment variant:
//! the trivia-style reveal flow and the neutral acknowledge flow differ only in
//! delay, feedback text, and band table. The engine is synchronous and owns no
//! tasks; the auto-advance is an armed deadline polled from the frame loop via
//! [`QuizEngine::tick`].

use std::time::{Duration, Instant};

use thiserror::Error;

use attune_types::{
    AnswerSheet, BandTable, CtaLink, Deck, FeedbackPolicy, Question, ScoreSummary, percent_of,
    summarize,
};

/// Lock-window length for the correctness-revealing variant.
pub const REVEAL_ADVANCE_DELAY: Duration = Duration::from_millis(2000);
/// Lock-window length for the neutral-acknowledgment variant.
pub const ACKNOWLEDGE_ADVANCE_DELAY: Duration = Duration::from_millis(900);

/// Per-deck behavior of the engine.
///
/// Everything that distinguishes one quiz variant from another lives here as
/// data. The CTA and disclaimer are opaque pass-throughs for the results
/// screen; the engine never interprets them.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub advance_delay: Duration,
    pub feedback: FeedbackPolicy,
    pub bands: BandTable,
    pub result_cta: Option<CtaLink>,
    pub disclaimer: Option<String>,
}

impl QuizConfig {
    /// A config with the variant's conventional delay and no pass-throughs.
    #[must_use]
    pub fn new(feedback: FeedbackPolicy, bands: BandTable) -> Self {
        let advance_delay = match feedback {
            FeedbackPolicy::Reveal => REVEAL_ADVANCE_DELAY,
            FeedbackPolicy::Acknowledge => ACKNOWLEDGE_ADVANCE_DELAY,
        };
        Self {
            advance_delay,
            feedback,
            bands,
            result_cta: None,
            disclaimer: None,
        }
    }
}

/// Externally visible lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// Presenting a question, accepting selections.
    Unlocked,
    /// Selection accepted; input rejected until the auto-advance fires.
    Locked,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("option {index} is out of range for a question with {len} options")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug)]
enum QuizState {
    NotStarted,
    InProgress {
        index: usize,
        feedback: Option<String>,
    },
    Complete(ScoreSummary),
}

/// An armed auto-advance deadline.
///
/// Captures the generation at arming time; `tick` honors it only if the
/// engine's generation is unchanged when it expires. A deadline that survives
/// a restart is therefore inert rather than a stale transition.
#[derive(Debug, Clone, Copy)]
struct AutoAdvance {
    ready_at: Instant,
    generation: u64,
}

/// The quiz flow engine.
///
/// Owned exclusively by its presentation context; all operations run
/// synchronously to completion and never block the caller.
#[derive(Debug)]
pub struct QuizEngine {
    deck: Deck,
    config: QuizConfig,
    sheet: AnswerSheet,
    state: QuizState,
    pending: Option<AutoAdvance>,
    generation: u64,
}

impl QuizEngine {
    /// Build an engine over an already-validated deck.
    ///
    /// Deck validation is the construction gate upstream (`Deck::new`); an
    /// engine over an empty deck is unrepresentable.
    #[must_use]
    pub fn new(deck: Deck, config: QuizConfig) -> Self {
        let sheet = AnswerSheet::blank(deck.len());
        Self {
            deck,
            config,
            sheet,
            state: QuizState::NotStarted,
            pending: None,
            generation: 0,
        }
    }

    /// Begin the quiz. Valid from `NotStarted` or `Complete`; a call while a
    /// run is in progress is a silent no-op.
    pub fn start(&mut self) {
        match self.state {
            QuizState::NotStarted | QuizState::Complete(_) => self.begin_run(),
            QuizState::InProgress { .. } => {
                tracing::debug!("start ignored while a run is in progress");
            }
        }
    }

    /// Discard the current run and begin again. Valid from any phase.
    pub fn restart(&mut self) {
        self.begin_run();
    }

    fn begin_run(&mut self) {
        self.pending = None;
        self.generation += 1;
        self.sheet = AnswerSheet::blank(self.deck.len());
        self.state = QuizState::InProgress {
            index: 0,
            feedback: None,
        };
    }

    /// Record a selection for the current question.
    ///
    /// Rejected silently while locked or outside a run; rejection, not
    /// queueing, is required so rapid input during the lock window cannot
    /// double-answer. An out-of-range index is the one recoverable error and
    /// leaves all state untouched.
    pub fn select(&mut self, option_index: usize, now: Instant) -> Result<(), SelectError> {
        let QuizState::InProgress { index, feedback } = &mut self.state else {
            tracing::debug!("selection ignored outside an active question");
            return Ok(());
        };
        if self.pending.is_some() {
            tracing::debug!("selection ignored during the lock window");
            return Ok(());
        }

        let Some(question) = self.deck.question(*index) else {
            tracing::warn!(index = *index, "current index has no question");
            return Ok(());
        };
        let len = question.options.len();
        if option_index >= len {
            return Err(SelectError::OutOfRange {
                index: option_index,
                len,
            });
        }

        self.sheet.record(*index, option_index);
        *feedback = Some(feedback_text(self.config.feedback, question, option_index));
        self.pending = Some(AutoAdvance {
            ready_at: now + self.config.advance_delay,
            generation: self.generation,
        });
        Ok(())
    }

    /// Advance time. Applies the armed auto-advance once its deadline passes
    /// and its generation still matches; a mismatched deadline is discarded
    /// without touching state.
    pub fn tick(&mut self, now: Instant) {
        let Some(advance) = self.pending else {
            return;
        };
        if now < advance.ready_at {
            return;
        }
        self.pending = None;

        if advance.generation != self.generation {
            tracing::debug!("discarding stale auto-advance from a previous run");
            return;
        }

        let QuizState::InProgress { index, .. } = &self.state else {
            return;
        };
        let index = *index;

        if index + 1 < self.deck.len() {
            self.state = QuizState::InProgress {
                index: index + 1,
                feedback: None,
            };
        } else {
            let summary = summarize(&self.deck, &self.sheet, &self.config.bands);
            self.state = QuizState::Complete(summary);
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.state {
            QuizState::NotStarted => Phase::NotStarted,
            QuizState::InProgress { .. } => {
                if self.pending.is_some() {
                    Phase::Locked
                } else {
                    Phase::Unlocked
                }
            }
            QuizState::Complete(_) => Phase::Complete,
        }
    }

    /// Index of the question being presented, while a run is in progress.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            QuizState::InProgress { index, .. } => Some(*index),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.deck.question(self.current_index()?)
    }

    /// Transient feedback for the last accepted selection, if inside the lock
    /// window.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        match &self.state {
            QuizState::InProgress { feedback, .. } => feedback.as_deref(),
            _ => None,
        }
    }

    /// The final result, once complete.
    #[must_use]
    pub fn summary(&self) -> Option<&ScoreSummary> {
        match &self.state {
            QuizState::Complete(summary) => Some(summary),
            _ => None,
        }
    }

    /// Percent of the deck already presented, for the progress gauge.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        match &self.state {
            QuizState::NotStarted => 0,
            QuizState::InProgress { index, .. } => percent_of(*index, self.deck.len()),
            QuizState::Complete(_) => 100,
        }
    }

    #[must_use]
    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }
}

/// Map a pressed digit key to an option index for the current question.
///
/// `'1'..='9'` address options one-based; anything else, or a digit beyond the
/// option count, has no mapping.
#[must_use]
pub fn digit_to_option(key: char, option_count: usize) -> Option<usize> {
    let digit = key.to_digit(10)? as usize;
    if (1..=option_count).contains(&digit) {
        Some(digit - 1)
    } else {
        None
    }
}

fn feedback_text(policy: FeedbackPolicy, question: &Question, choice: usize) -> String {
    let correct = question
        .options
        .get(choice)
        .is_some_and(|option| option.correct);

    match policy {
        FeedbackPolicy::Reveal => {
            if correct {
                "Correct!".to_string()
            } else {
                match question
                    .correct_index()
                    .and_then(|i| question.options.get(i))
                {
                    Some(answer) => format!("Incorrect! Correct answer: {}", answer.text),
                    None => "Noted.".to_string(),
                }
            }
        }
        FeedbackPolicy::Acknowledge => {
            if correct {
                "Good choice.".to_string()
            } else {
                "Thanks, noted.".to_string()
            }
        }
    }
}
