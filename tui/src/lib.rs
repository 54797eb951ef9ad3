//! TUI rendering for Attune using ratatui.

mod input;
mod theme;

pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap},
};
use attune_engine::{App, Phase};

const PANEL_WIDTH: u16 = 72;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.phase() {
        Phase::NotStarted => draw_intro(frame, app, chunks[0], &palette),
        Phase::Unlocked | Phase::Locked => draw_question(frame, app, chunks[0], &palette, &glyphs),
        Phase::Complete => draw_results(frame, app, chunks[0], &palette),
    }

    draw_status_bar(frame, app, chunks[1], &palette, &glyphs);
}

fn draw_intro(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let panel = centered(area, PANEL_WIDTH, 12);
    let block = panel_block(app.title(), palette);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines = Vec::new();
    if let Some(description) = app.description() {
        lines.push(Line::styled(
            description.to_string(),
            Style::default().fg(palette.text_secondary),
        ));
        lines.push(Line::default());
    }
    lines.push(Line::styled(
        "Press Enter to begin",
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        "q to quit",
        Style::default().fg(palette.text_muted),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn draw_question(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(question) = app.current_question() else {
        return;
    };
    let locked = app.phase() == Phase::Locked;
    let selection = app.current_selection();

    let option_rows = question.options.len() as u16;
    let panel = centered(area, PANEL_WIDTH, option_rows + 13);
    let block = panel_block(app.title(), palette);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Question body
        ])
        .split(inner);

    let (number, total) = (app.question_number().unwrap_or(0), app.total_questions());
    let gauge = Gauge::default()
        .ratio(f64::from(app.progress_percent()) / 100.0)
        .label(format!("Question {number} of {total}"))
        .gauge_style(Style::default().fg(palette.primary).bg(palette.bg_highlight));
    frame.render_widget(gauge, rows[0]);

    let mut lines = Vec::new();
    if let Some(category) = &question.category {
        lines.push(Line::styled(
            category.to_uppercase(),
            Style::default().fg(palette.text_muted),
        ));
    }
    lines.push(Line::styled(
        question.prompt.clone(),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());

    for (i, option) in question.options.iter().enumerate() {
        let chosen = locked && selection == Some(i);
        let marker = if chosen { glyphs.pointer } else { " " };
        let style = if chosen {
            Style::default()
                .fg(palette.primary)
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD)
        } else if locked {
            Style::default().fg(palette.text_disabled)
        } else {
            Style::default().fg(palette.text_secondary)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.primary)),
            Span::styled(format!("{}. ", i + 1), Style::default().fg(palette.text_muted)),
            Span::styled(option.text.clone(), style),
        ]));
    }

    lines.push(Line::default());
    if let Some(feedback) = app.feedback() {
        lines.push(Line::styled(
            feedback.to_string(),
            Style::default().fg(palette.accent),
        ));
    } else {
        lines.push(Line::styled(
            format!("Press 1-{} to answer", question.options.len()),
            Style::default().fg(palette.text_muted),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, rows[2]);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(summary) = app.summary() else {
        return;
    };

    let panel = centered(area, PANEL_WIDTH, 15);
    let block = panel_block("Results", palette);
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines = vec![
        Line::styled(
            format!(
                "You scored {} out of {} ({}%)",
                summary.score, summary.total, summary.percent
            ),
            Style::default().fg(palette.text_primary),
        ),
        Line::styled(
            summary.band.clone(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];

    if let Some(cta) = app.result_cta() {
        lines.push(Line::from(vec![
            Span::styled(
                cta.label.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!("  {}", cta.href),
                Style::default().fg(palette.text_muted),
            ),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::styled(
        "Press r to retake, q to quit",
        Style::default().fg(palette.text_muted),
    ));

    if let Some(disclaimer) = app.disclaimer() {
        lines.push(Line::default());
        lines.push(Line::styled(
            disclaimer.to_string(),
            Style::default().fg(palette.text_disabled),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(status) = app.status_message() {
        Line::styled(status.to_string(), Style::default().fg(palette.warning))
    } else {
        let hint = match app.phase() {
            Phase::NotStarted => "Enter begin",
            Phase::Unlocked => "1-9 answer",
            Phase::Locked => "one moment...",
            Phase::Complete => "r retake",
        };
        Line::from(vec![
            Span::styled(app.title().to_string(), Style::default().fg(palette.text_muted)),
            Span::styled(glyphs.separator, Style::default().fg(palette.bg_border)),
            Span::styled(hint.to_string(), Style::default().fg(palette.text_muted)),
            Span::styled(glyphs.separator, Style::default().fg(palette.bg_border)),
            Span::styled("q quit", Style::default().fg(palette.text_muted)),
        ])
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(palette.bg_panel));
    frame.render_widget(paragraph, area);
}

fn panel_block<'a>(title: &str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(palette.bg_panel))
}

fn centered(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = area.width.min(max_width);
    let height = area.height.min(max_height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
