//! TUI rendering with ratatui
//!
//! Board, keyboard and side panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{FeedbackSymbol, WORD_LENGTH};
use crate::game::SessionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
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

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE SIEVE")
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

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let board_height = u16::try_from(app.session.tries()).unwrap_or(u16::MAX).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(board_height), Constraint::Min(5)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

const fn symbol_color(symbol: FeedbackSymbol) -> Color {
    match symbol {
        FeedbackSymbol::Match => Color::Green,
        FeedbackSymbol::Present => Color::Yellow,
        FeedbackSymbol::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, background: Option<Color>) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match background {
        Some(bg) => Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(text, Style::default().fg(Color::White)),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines = Vec::with_capacity(app.session.tries());

    for (word, feedback) in history {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (i, &symbol) in feedback.symbols().iter().enumerate() {
            spans.push(tile(char::from(word.char_at(i)), Some(symbol_color(symbol))));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !app.session.is_over() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        let mut typed = app.input_buffer.chars();
        for _ in 0..WORD_LENGTH {
            spans.push(tile(typed.next().unwrap_or('_'), None));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < app.session.tries() {
        lines.push(Line::from(Span::styled(
            " .  .  .  .  . ",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.letter_states();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|b| {
                    let color = states[usize::from(b - b'a')].map(symbol_color);
                    tile(char::from(b), color)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Length(3), // Tries gauge
            Constraint::Min(4),    // Statistics
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_tries_gauge(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = app.hint.as_ref().map_or_else(
        || vec![Line::from("Press Tab for a suggestion")],
        |hint| {
            vec![
                Line::from(vec![
                    Span::raw("Suggested: "),
                    Span::styled(
                        hint.word.to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(format!("Score:     {:.2}", hint.score)),
                Line::from(format!("Fits:      {} candidates", hint.remaining)),
            ]
        },
    );

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_tries_gauge(f: &mut Frame, app: &App, area: Rect) {
    let tries = app.session.tries();
    let used = tries - app.session.remaining_tries();
    let percent = if tries == 0 {
        100
    } else {
        u16::try_from(used * 100 / tries).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Tries ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{tries} used"));
    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![Line::from(format!(
        "Played: {} | Won: {}",
        stats.total_games, stats.games_won
    ))];
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = count * 12 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(" Statistics ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (&app.input_mode, app.session.status()) {
        (InputMode::GameOver, SessionStatus::Won) => (
            " You win! | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            format!("The word was {}", app.session.secret().text().to_uppercase()),
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Enter Guess (5 letters) | Tab for hint ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };
    let help = match app.input_mode {
        InputMode::Guessing => "Enter: Submit | Tab: Hint | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };

    let status = Paragraph::new(format!(
        "Games: {} | Win Rate: {win_rate:.0}% | {help}",
        app.stats.total_games
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameSession;
    use crate::scoring::{LetterStatistics, WordScorer};
    use crate::solver::CandidateSet;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_hint() {
        let stats = LetterStatistics::parse("a,8 c,4 e,11 g,2 i,7 n,6 r,7 t,6").unwrap();
        let dictionary: Vec<Word> = ["irate", "crane", "grate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let candidates = CandidateSet::new(&dictionary, &WordScorer::new(&stats)).unwrap();
        let mut app = App::new(
            &dictionary,
            &candidates,
            GameSession::new(Word::new("grate").unwrap(), 6),
        );

        app.input_buffer = "crane".to_string();
        app.submit_guess();
        app.compute_hint();

        let text = screen_text(&app);
        assert!(text.contains("WORDLE SIEVE"));
        assert!(text.contains("Suggested: IRATE"));
        assert!(text.contains("1/6 used"));
    }

    #[test]
    fn renders_loss_with_secret() {
        let stats = LetterStatistics::parse("a,8 c,4 e,11 g,2 n,6 r,7 t,6").unwrap();
        let dictionary = vec![Word::new("crane").unwrap(), Word::new("grate").unwrap()];
        let candidates = CandidateSet::new(&dictionary, &WordScorer::new(&stats)).unwrap();
        let mut app = App::new(
            &dictionary,
            &candidates,
            GameSession::new(Word::new("grate").unwrap(), 1),
        );

        app.input_buffer = "crane".to_string();
        app.submit_guess();

        let text = screen_text(&app);
        assert!(text.contains("The word was GRATE"));
    }
}
