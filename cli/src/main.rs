//! Attune CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`attune_engine`] (application state) and [`attune_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! ```text
//! main() -> resolve deck -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed ~30 FPS render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking)
//! 3. Advance application state (`app.tick()`, applies due auto-advances)
//! 4. Render frame

mod assets;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use attune_config::{AttuneConfig, LoadedDeck};
use attune_engine::App;
use attune_tui::{draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_attune_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_attune_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = attune_log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn attune_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.attune/logs/attune.log
    if let Some(config_path) = AttuneConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("attune.log"));
    }

    // Fallback: ./.attune/logs/attune.log (useful in constrained environments)
    candidates.push(PathBuf::from(".attune").join("logs").join("attune.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// On drop, raw mode and the alternate screen are restored, ensuring the
/// terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match AttuneConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Ignoring unusable config: {err}");
            None
        }
    };

    let selector = env::args().nth(1).or_else(|| {
        config
            .as_ref()
            .and_then(|cfg| cfg.deck_selector().map(str::to_string))
    });

    // A bad deck means there is nothing to present; fall back to a plain
    // message instead of entering the TUI at all.
    let loaded = resolve_deck(selector.as_deref())?;
    let ui_options = config
        .as_ref()
        .map(AttuneConfig::ui_options)
        .unwrap_or_default();

    let mut app = App::new(
        loaded.title,
        loaded.description,
        loaded.deck,
        loaded.config,
        ui_options,
    );

    let mut session = TerminalSession::new()?;
    run_app(&mut session.terminal, &mut app).await
}

fn resolve_deck(selector: Option<&str>) -> Result<LoadedDeck> {
    let Some(selector) = selector else {
        return assets::builtin(assets::DEFAULT_DECK)
            .expect("default deck name is bundled")
            .context("bundled default deck is invalid");
    };

    if let Some(result) = assets::builtin(selector) {
        return result.with_context(|| format!("bundled deck '{selector}' is invalid"));
    }

    let path = PathBuf::from(selector);
    let loaded = attune_config::load_deck(&path).with_context(|| {
        format!(
            "no quiz available: '{selector}' is neither a bundled deck ({}) nor a readable deck file",
            assets::NAMES.join(", ")
        )
    })?;
    Ok(loaded)
}

const FRAME_DURATION: Duration = Duration::from_millis(33);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        if handle_events(app)? {
            return Ok(());
        }

        app.tick(Instant::now());

        terminal.draw(|frame| draw(frame, app))?;
    }
}
