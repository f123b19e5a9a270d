//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterClass, MAX_GUESSES, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board + messages
            Constraint::Length(5),  // Keyboard
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, now, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, now, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn tile_style(class: Option<LetterClass>) -> Style {
    match class {
        Some(LetterClass::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterClass::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterClass::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let banner = app.tracker.session().mode().banner();
    let header = Paragraph::new(format!("WORDLE · {banner}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let history: Vec<_> = app.tracker.history().collect();
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH);
        if let Some((guess, feedback)) = history.get(row) {
            // A flipping row only colors the tiles that have turned
            let shown = match &app.reveal {
                Some(reveal) if reveal.row == row => reveal.shown(now),
                _ => WORD_LENGTH,
            };
            for (position, (&letter, &class)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
                let class = (position < shown).then_some(class);
                spans.push(Span::styled(format!(" {} ", char::from(letter)), tile_style(class)));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && !app.tracker.is_terminal() {
            let pending: Vec<char> = app.dispatcher.buffer().chars().collect();
            for position in 0..WORD_LENGTH {
                let text = pending
                    .get(position)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                spans.push(Span::styled(text, Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let keyboard = app.visible_keyboard(now);
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", char::from(letter)),
                            tile_style(keyboard.state_of(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.tracker.is_terminal() {
        "Esc: Quit | Ctrl-N: New word (random mode)"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let row = format!(
        "Guess {}/{MAX_GUESSES}",
        (app.tracker.current_row() + 1).min(MAX_GUESSES)
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    f.render_widget(Paragraph::new(row).alignment(Alignment::Center), chunks[0]);
    f.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}
