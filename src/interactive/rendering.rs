//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, InputMode};
use crate::core::{LetterEvaluation, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameStatus, MessageStyle, Transition};
use crate::output::formatters::{KEYBOARD_ROWS, create_progress_bar};
use crate::output::share_text;
use crate::persistence::Storage;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<W: WordSource, S: Storage>(f: &mut Frame, app: &App<W, S>) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(3),                          // Messages
            Constraint::Length(3),                       // Status bar
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    match app.input_mode {
        InputMode::NewGamePrompt => render_new_game_prompt(f, area),
        InputMode::Statistics => render_statistics(f, app, area),
        InputMode::Playing | InputMode::GameOver => {}
    }
}

fn render_header<W: WordSource, S: Storage>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let state = app.controller.state();
    let mut title = vec![Span::styled(
        format!("WORDLE DAILY - {}", app.controller.today()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if state.developer_mode() {
        title.push(Span::styled(
            format!("  [dev: {}]", state.answer()),
            Style::default().fg(Color::Magenta),
        ));
    }

    let header = Paragraph::new(Line::from(title))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Colors for a tile or key with the given evaluation
fn evaluation_style(evaluation: LetterEvaluation) -> Style {
    match evaluation {
        LetterEvaluation::Correct => Style::new()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterEvaluation::Present => Style::new()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterEvaluation::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        LetterEvaluation::Filled => Style::new()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED),
        LetterEvaluation::Empty => Style::new().fg(Color::DarkGray),
    }
}

fn render_board<W: WordSource, S: Storage>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let state = app.controller.state();
    let rejected_row = match app.last_transition {
        Transition::Rejected { row, .. } => Some(row),
        _ => None,
    };

    let lines: Vec<Line> = (0..MAX_ATTEMPTS)
        .map(|row| {
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for col in 0..WORD_LENGTH {
                let tile = state.tile(row, col);
                let mut style = evaluation_style(tile.evaluation);
                if rejected_row == Some(row) && state.message().is_some() {
                    style = style.fg(Color::Red);
                }
                spans.push(Span::styled(
                    format!(" {} ", tile.letter.unwrap_or('·')),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let border = match state.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::Active => Color::White,
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(board, area);
}

fn render_keyboard<W: WordSource, S: Storage>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let hints = app.controller.state().key_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let evaluation = hints.get(c).unwrap_or(LetterEvaluation::Filled);
                    [
                        Span::styled(format!(" {c} "), evaluation_style(evaluation)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<W: WordSource, S: Storage>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let state = app.controller.state();
    let mut lines = Vec::new();

    if let Some(message) = state.message() {
        let style = match message.style {
            MessageStyle::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            MessageStyle::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(Span::styled(message.text.clone(), style)));
    }

    if let Some(share) = share_text(state, app.controller.today()) {
        lines.push(Line::from(""));
        lines.extend(share.lines().map(|l| Line::from(l.to_string())));
    }

    let messages = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(messages, area);
}

fn render_status<W: WordSource, S: Storage>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let (mode_text, mode_color) = match app.input_mode {
        InputMode::Playing => ("PLAYING", Color::Green),
        InputMode::NewGamePrompt => ("NEW GAME", Color::Yellow),
        InputMode::Statistics => ("STATS", Color::Cyan),
        InputMode::GameOver => ("GAME OVER", Color::Magenta),
    };

    let help = match app.input_mode {
        InputMode::Playing if app.controller.developer_mode_allowed() => {
            "Type letters | Enter: submit | Tab: stats | Ctrl-N: new | Ctrl-D: dev | Esc: quit"
        }
        InputMode::Playing => "Type letters | Enter: submit | Tab: stats | Ctrl-N: new | Esc: quit",
        InputMode::NewGamePrompt => "d: today's word | r: random word | Esc: cancel",
        InputMode::Statistics => "Any key: close",
        InputMode::GameOver => "n: new game | s: stats | q: quit",
    };

    let status = Line::from(vec![
        Span::styled(
            format!(" {mode_text} "),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(help, Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(status).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// Rectangle of the given size centered in `area`
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_new_game_prompt(f: &mut Frame, area: Rect) {
    let popup = centered(40, 6, area);
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("d", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("  today's word again"),
        ]),
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("  a random word"),
        ]),
    ];

    let prompt = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" New Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(prompt, popup);
}

fn render_statistics<W: WordSource, S: Storage>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let stats = app.controller.statistics();
    let popup = centered(44, 15, area);

    let mut content = vec![
        Line::from(format!("Played:          {}", stats.played)),
        Line::from(format!("Win %:           {}", stats.win_percentage())),
        Line::from(format!("Current streak:  {}", stats.current_streak)),
        Line::from(format!("Max streak:      {}", stats.max_streak)),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    let last_win = (app.controller.state().status() == GameStatus::Won)
        .then(|| app.controller.state().attempts());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let color = if last_win == Some(i + 1) {
            Color::Green
        } else {
            Color::DarkGray
        };
        content.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled(
                create_progress_bar(f64::from(count), f64::from(max), 24),
                Style::default().fg(color),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}
