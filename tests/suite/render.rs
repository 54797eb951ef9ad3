//! Render assertions against a test backend.

use std::time::Instant;

use attune_engine::{ACKNOWLEDGE_ADVANCE_DELAY, App, Phase};
use ratatui::{Terminal, backend::TestBackend};

use crate::common::test_app;

fn render(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| attune_tui::draw(frame, app))
        .expect("draw succeeds");
    terminal.backend().to_string()
}

#[test]
fn intro_screen_shows_title_and_begin_hint() {
    let app = test_app();
    let screen = render(&app);
    assert!(screen.contains("Fixture Quiz"));
    assert!(screen.contains("A fixture."));
    assert!(screen.contains("Press Enter to begin"));
}

#[test]
fn question_screen_shows_progress_prompt_and_options() {
    let mut app = test_app();
    app.start();

    let screen = render(&app);
    assert!(screen.contains("Question 1 of 3"));
    assert!(screen.contains("First question?"));
    assert!(screen.contains("1. right"));
    assert!(screen.contains("2. wrong"));
    assert!(screen.contains("Press 1-2 to answer"));
}

#[test]
fn lock_window_shows_feedback_instead_of_the_hint() {
    let mut app = test_app();
    app.start();
    app.select_option(0, Instant::now());
    assert_eq!(app.phase(), Phase::Locked);

    let screen = render(&app);
    assert!(screen.contains("Good choice."));
    assert!(!screen.contains("Press 1-2 to answer"));
}

#[test]
fn results_screen_shows_score_and_band() {
    let mut app = test_app();
    let mut now = Instant::now();
    app.start();
    for _ in 0..3 {
        app.select_option(0, now);
        now += ACKNOWLEDGE_ADVANCE_DELAY;
        app.tick(now);
    }
    assert_eq!(app.phase(), Phase::Complete);

    let screen = render(&app);
    assert!(screen.contains("You scored 3 out of 3 (100%)"));
    assert!(screen.contains("strong"));
    assert!(screen.contains("Press r to retake"));
}
