//! End-to-end properties of the quiz flow.

use std::time::{Duration, Instant};

use attune_engine::{
    ACKNOWLEDGE_ADVANCE_DELAY, Phase, QuizEngine, SelectError,
};
use attune_types::{Deck, DeckError};

use crate::common::{acknowledge_config, three_question_deck};

fn engine() -> QuizEngine {
    QuizEngine::new(three_question_deck(), acknowledge_config())
}

#[test]
fn literal_scenario_three_questions_two_correct() {
    // Dataset: 3 questions, correct option at index 0. Sequence: start, pick
    // 0 (correct), wait, pick 1 (incorrect), wait, pick 0 (correct), wait.
    let mut engine = engine();
    let mut now = Instant::now();

    engine.start();
    for pick in [0usize, 1, 0] {
        engine.select(pick, now).expect("selection in range");
        now += ACKNOWLEDGE_ADVANCE_DELAY;
        engine.tick(now);
    }

    assert_eq!(engine.phase(), Phase::Complete);
    let summary = engine.summary().expect("complete run has a summary");
    assert_eq!(summary.score, 2);
    assert_eq!(summary.percent, 67);
    assert_eq!(summary.band, "moderate");
}

#[test]
fn completion_is_deterministic_and_single() {
    let mut engine = engine();
    let mut now = Instant::now();
    engine.start();

    let mut completions = 0;
    for _ in 0..3 {
        assert_ne!(engine.phase(), Phase::Complete, "never completes early");
        engine.select(0, now).expect("selection in range");
        now += ACKNOWLEDGE_ADVANCE_DELAY;
        engine.tick(now);
        if engine.phase() == Phase::Complete {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);

    // Extra ticks and selections after completion change nothing.
    engine.select(0, now).expect("silent no-op after complete");
    engine.tick(now + Duration::from_secs(60));
    assert_eq!(engine.phase(), Phase::Complete);
}

#[test]
fn lock_window_excludes_further_selections() {
    let mut engine = engine();
    let now = Instant::now();
    engine.start();

    engine.select(0, now).expect("selection in range");
    let sheet_before = engine.sheet().clone();

    for burst in 0..5 {
        engine
            .select(1, now + Duration::from_millis(burst * 10))
            .expect("locked selections are silent no-ops");
    }
    assert_eq!(engine.sheet(), &sheet_before);
}

#[test]
fn restart_purity_after_partial_run() {
    let mut engine = engine();
    let mut now = Instant::now();
    engine.start();

    engine.select(1, now).expect("selection in range");
    now += ACKNOWLEDGE_ADVANCE_DELAY;
    engine.tick(now);
    engine.select(1, now).expect("selection in range");

    let armed_deadline = now + ACKNOWLEDGE_ADVANCE_DELAY;
    engine.restart();

    assert_eq!(engine.phase(), Phase::Unlocked);
    assert_eq!(engine.current_index(), Some(0));
    assert_eq!(engine.sheet().answered_count(), 0);
    assert!(engine.feedback().is_none());

    // The deadline armed before the restart must never fire into the new run.
    engine.tick(armed_deadline + Duration::from_secs(1));
    assert_eq!(engine.phase(), Phase::Unlocked);
    assert_eq!(engine.current_index(), Some(0));
}

#[test]
fn out_of_range_is_the_only_reported_error() {
    let mut engine = engine();
    let now = Instant::now();
    engine.start();

    assert_eq!(
        engine.select(7, now),
        Err(SelectError::OutOfRange { index: 7, len: 2 })
    );
    // State untouched, run continues normally.
    assert_eq!(engine.phase(), Phase::Unlocked);
    engine.select(0, now).expect("valid selection still accepted");
    assert_eq!(engine.phase(), Phase::Locked);
}

#[test]
fn empty_dataset_fails_validation_with_no_engine() {
    // Construction is the gate: no engine exists over an empty deck, so no
    // fallback state can expose a current question.
    assert_eq!(Deck::new(Vec::new()), Err(DeckError::Empty));
}
