//! Core engine for Attune - the quiz state machine and app state.
//!
//! This crate contains the [`App`] state the TUI renders from, without TUI
//! dependencies. The quiz flow itself lives in [`quiz`] and is driven entirely
//! by user events plus a per-frame [`App::tick`].

use std::time::Instant;

mod quiz;

pub use quiz::{
    ACKNOWLEDGE_ADVANCE_DELAY, Phase, QuizConfig, QuizEngine, REVEAL_ADVANCE_DELAY, SelectError,
    digit_to_option,
};

// Re-export from attune-types for the public API
pub use attune_types::{
    AnswerOption, AnswerSheet, Band, BandTable, CtaLink, Deck, DeckError, FeedbackPolicy, Question,
    ScoreSummary, UiOptions, summarize,
};


/// Application state.
///
/// Owns one [`QuizEngine`] plus the presentation-facing extras around it:
/// deck title and description for the intro screen, UI options, a status line,
/// and the quit flag. Created when the terminal session starts and dropped
/// with it; there is no process-wide instance.
#[derive(Debug)]
pub struct App {
    engine: QuizEngine,
    title: String,
    description: Option<String>,
    ui_options: UiOptions,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        deck: Deck,
        config: QuizConfig,
        ui_options: UiOptions,
    ) -> Self {
        Self {
            engine: QuizEngine::new(deck, config),
            title: title.into(),
            description,
            ui_options,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn start(&mut self) {
        self.status_message = None;
        self.engine.start();
    }

    pub fn restart(&mut self) {
        self.status_message = None;
        self.engine.restart();
    }

    /// Forward a selection to the engine. An out-of-range index is recoverable
    /// and surfaces on the status line rather than interrupting the run.
    pub fn select_option(&mut self, option_index: usize, now: Instant) {
        if let Err(err) = self.engine.select(option_index, now) {
            tracing::warn!(option_index, "rejected selection: {err}");
            self.set_status(err.to_string());
        }
    }

    /// Advance frame time; applies a due auto-advance.
    pub fn tick(&mut self, now: Instant) {
        self.engine.tick(now);
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    /// One-based position of the current question, for "Question 2 of 3".
    #[must_use]
    pub fn question_number(&self) -> Option<usize> {
        self.engine.current_index().map(|index| index + 1)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.engine.deck().len()
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.engine.progress_percent()
    }

    /// The option recorded for the current question, if already selected.
    #[must_use]
    pub fn current_selection(&self) -> Option<usize> {
        self.engine.sheet().get(self.engine.current_index()?)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.engine.feedback()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&ScoreSummary> {
        self.engine.summary()
    }

    #[must_use]
    pub fn result_cta(&self) -> Option<&CtaLink> {
        self.engine.config().result_cta.as_ref()
    }

    #[must_use]
    pub fn disclaimer(&self) -> Option<&str> {
        self.engine.config().disclaimer.as_deref()
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
