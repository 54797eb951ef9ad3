//! Input handling for the Attune TUI.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use attune_engine::{App, Phase, digit_to_option};

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Drain pending terminal events into the app without blocking.
///
/// Returns whether the app wants to quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME && event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            apply_key(app, key);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

fn apply_key(app: &mut App, key: KeyEvent) {
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    // Ctrl+C quits from any phase
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match app.phase() {
        Phase::NotStarted => handle_intro_keys(app, key),
        Phase::Unlocked | Phase::Locked => handle_question_keys(app, key),
        Phase::Complete => handle_results_keys(app, key),
    }
}

fn handle_intro_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('b') => app.start(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_question_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char(c) => {
            let Some(count) = app.current_question().map(|q| q.options.len()) else {
                return;
            };
            // Digits map one-based onto the current question's options. The
            // engine itself rejects input during the lock window.
            if let Some(option) = digit_to_option(c, count) {
                debug!(key = %c, option, "digit selection");
                app.select_option(option, Instant::now());
            }
        }
        _ => {}
    }
}

fn handle_results_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => app.restart(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}
