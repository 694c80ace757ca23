//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle, Panel};
use crate::core::{LetterState, WORD_LENGTH};
use crate::game::{Clock, ClueKind, GameStatus};
use crate::store::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("LOGICLINE")
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

fn tile_style(state: Option<LetterState>) -> Style {
    match state {
        Some(LetterState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_board<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let session = app.driver.session();
    let max_rows = session.config().max_rows;
    let mut lines = Vec::with_capacity(max_rows + 6);

    for row in 0..max_rows {
        let mut spans = vec![Span::raw("  ")];
        if let Some(done) = session.rows().get(row) {
            for (&c, &state) in done.guess.chars().iter().zip(done.feedback.states()) {
                spans.push(Span::styled(format!(" {} ", char::from(c)), tile_style(Some(state))));
                spans.push(Span::raw(" "));
            }
        } else if row == session.rows().len() && app.input_mode == InputMode::Guess {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LENGTH {
                let text = typed.get(i).map_or(" _ ".to_string(), |c| format!(" {c} "));
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

    for keys in KEYBOARD_ROWS {
        let mut spans = vec![Span::raw("  ")];
        for c in keys.bytes() {
            spans.push(Span::styled(
                format!(" {} ", char::from(c)),
                tile_style(session.key_state(c)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let title = match session.status() {
        GameStatus::Won => " Solved! ",
        GameStatus::Lost => " Out of guesses ",
        GameStatus::NotStarted | GameStatus::InProgress => " Board ",
    };
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Score and clue shop
            Constraint::Min(6),    // Help / leaderboard / history
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_panel(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let session = app.driver.session();
    let costs = &session.config().clue_costs;

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Streak: "),
            Span::styled(
                session.streak().to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(format!(
            "Mode: {}   {}",
            session.mode().label(),
            app.driver.today().format("%Y-%m-%d")
        )),
        Line::from(""),
    ];
    for (i, kind) in ClueKind::ALL.iter().enumerate() {
        let affordable = session.score() >= kind.cost(costs);
        let style = if affordable {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::styled(
            format!("{}: {} ({} pts)", i + 1, kind.label(), kind.cost(costs)),
            style,
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_panel<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let (title, items): (&str, Vec<ListItem>) = match app.panel {
        Panel::Help => (
            " Keys ",
            [
                "Letters + Enter: guess",
                "1/2/3: buy a clue",
                "Tab: daily / random",
                "Ctrl+N: new game  Ctrl+R: restart",
                "After a game: c continue, r restart",
                "F2: leaderboard  F3: history",
                "Esc: quit",
            ]
            .into_iter()
            .map(ListItem::new)
            .collect(),
        ),
        Panel::Leaderboard => {
            let board = app.driver.profile().leaderboard();
            let items = if board.is_empty() {
                vec![ListItem::new("No scores yet")]
            } else {
                board
                    .iter()
                    .enumerate()
                    .map(|(i, e)| {
                        ListItem::new(format!("{:>2}. {:<20} {:>5}", i + 1, e.name, e.score))
                    })
                    .collect()
            };
            (" Leaderboard ", items)
        }
        Panel::History => {
            let history = app.driver.profile().history();
            let items = if history.is_empty() {
                vec![ListItem::new("No games yet")]
            } else {
                history
                    .iter()
                    .take(usize::from(area.height.saturating_sub(2)))
                    .map(|r| {
                        let style = if r.win {
                            Style::default().fg(Color::Green)
                        } else {
                            Style::default().fg(Color::Red)
                        };
                        ListItem::new(crate::output::formatters::history_line(r)).style(style)
                    })
                    .collect()
            };
            (" History ", items)
        }
    };

    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
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

fn render_input<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guess => (
            " Your guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::NamePrompt => (
            " Name for the leaderboard | Enter to save, Esc to skip ",
            app.name_buffer.as_str(),
            Color::Green,
        ),
        InputMode::Menu => (
            " c: continue | r: restart | Tab: switch mode | q: quit ",
            "",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &App<S, C>, area: Rect) {
    let session = app.driver.session();
    let text = format!(
        "Row {}/{}  |  {} words  |  continue costs {}",
        session.current_row().min(session.config().max_rows),
        session.config().max_rows,
        app.driver.words().len(),
        session.config().continue_cost
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
