//! TUI rendering with ratatui
//!
//! Board, keyboard, countdown and messages for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::config::Theme;
use crate::core::LetterStatus;
use crate::engine::Cell;
use crate::storage::Store;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Colours that change with the theme
struct Palette {
    background: Color,
    text: Color,
    border: Color,
    empty_tile: Color,
}

impl Palette {
    const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                border: Color::Cyan,
                empty_tile: Color::DarkGray,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                border: Color::Blue,
                empty_tile: Color::Gray,
            },
        }
    }
}

fn status_style(status: LetterStatus, palette: &Palette) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unset => Style::default().fg(palette.text).bg(palette.empty_tile),
    }
}

fn tile_text(letter: Option<char>) -> String {
    let shown = letter.map_or(' ', |c| c.to_uppercase().next().unwrap_or(c));
    format!(" {shown} ")
}

/// Main UI rendering function
pub fn ui<S: Store>(f: &mut Frame, app: &App<'_, S>) {
    let palette = Palette::for_theme(app.session.preferences().theme);
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Timer
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, &palette, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, &palette, main_chunks[0]);
    render_side_panel(f, app, &palette, main_chunks[1]);
    render_timer(f, app, &palette, chunks[2]);
    render_status(f, app, &palette, chunks[3]);
}

fn render_header<S: Store>(f: &mut Frame, app: &App<'_, S>, palette: &Palette, area: Rect) {
    let settings = app.session.engine().settings();
    let header = Paragraph::new(format!(
        "KELMAT | {} | {} letters",
        settings.language, settings.letter_length
    ))
    .style(
        Style::default()
            .fg(palette.border)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(palette.border)),
    );
    f.render_widget(header, area);
}

fn board_row<'l>(cells: &[Cell], palette: &Palette, shaking: bool) -> Line<'l> {
    let mut spans = Vec::with_capacity(cells.len() * 2 + 1);
    // a rejected row is drawn shifted and outlined in red
    if shaking {
        spans.push(Span::raw("  "));
    }
    for cell in cells {
        let mut style = status_style(cell.visible_status(), palette);
        if shaking {
            style = style.fg(Color::Red);
        }
        spans.push(Span::styled(tile_text(cell.letter), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<S: Store>(f: &mut Frame, app: &App<'_, S>, palette: &Palette, area: Rect) {
    let engine = app.session.engine();
    let shake_row = engine.shake_row();

    let mut lines = vec![Line::from("")];
    for (index, row) in engine.board().rows().iter().enumerate() {
        lines.push(board_row(row, palette, shake_row == Some(index)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(palette.border)),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: Store>(f: &mut Frame, app: &App<'_, S>, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, palette, chunks[0]);
    render_messages(f, app, palette, chunks[1]);
}

fn render_keyboard<S: Store>(f: &mut Frame, app: &App<'_, S>, palette: &Palette, area: Rect) {
    let language = app.session.engine().settings().language;
    let keyboard = app.session.engine().keyboard();

    let lines: Vec<Line> = language
        .keyboard_rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let status = keyboard.status(language.normalize(key));
                    Span::styled(tile_text(Some(key)), status_style(status, palette))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .style(Style::default().fg(palette.border)),
    );
    f.render_widget(widget, area);
}

fn render_messages<S: Store>(f: &mut Frame, app: &App<'_, S>, palette: &Palette, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    match app.input_mode {
        InputMode::ResumePrompt => items.push(
            ListItem::new("You have a game in progress. Resume it? (y/n)").style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        InputMode::RoundOver => items.push(
            ListItem::new("Press Enter for a new word")
                .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
        ),
        InputMode::Playing => {}
    }

    items.extend(app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(palette.text),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .style(Style::default().fg(palette.border)),
    );
    f.render_widget(list, area);
}

fn render_timer<S: Store>(f: &mut Frame, app: &App<'_, S>, palette: &Palette, area: Rect) {
    let block = Block::default()
        .title(" Timer ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.border));

    if !app.session.timer_enabled() {
        let off = Paragraph::new("off (Ctrl+T to enable)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(off, area);
        return;
    }

    let timer = app.session.timer();
    let percent = timer.percentage_remaining();
    let color = if percent <= 25.0 {
        Color::Red
    } else if percent <= 50.0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        .percent(percent.clamp(0.0, 100.0) as u16)
        .label(timer.formatted());
    f.render_widget(gauge, area);
}

fn render_status<S: Store>(f: &mut Frame, app: &App<'_, S>, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = app.session.statistics();

    let played = Paragraph::new(format!(
        "Played: {} | Win: {}%",
        stats.games_played, stats.win_percentage
    ))
    .alignment(Alignment::Center);
    f.render_widget(played, chunks[0]);

    let streak = Paragraph::new(format!(
        "Streak: {} | Best: {}",
        stats.current_streak, stats.best_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let average = Paragraph::new(format!("Avg time: {}s", stats.average_time))
        .alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ^N: New | ^T: Timer | ^D: Theme")
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.empty_tile));
    f.render_widget(help, chunks[3]);
}
