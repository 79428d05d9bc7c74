//! TUI application state and logic

use crate::core::{FeedbackSymbol, Word};
use crate::game::{GameSession, SessionStatus};
use crate::solver::CandidateSet;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [Word],
    pub candidates: &'a CandidateSet,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub hint: Option<HintInfo>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HintInfo {
    pub word: String,
    pub score: f64,
    pub remaining: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word], candidates: &'a CandidateSet, session: GameSession) -> Self {
        Self {
            dictionary,
            candidates,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type a five-letter guess and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press Tab for a hint from the solver.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            hint: None,
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.guess(&input) {
            Ok(feedback) => {
                self.hint = None;
                match self.session.status() {
                    SessionStatus::Won => {
                        let guess_count = self.session.history().len();
                        self.record_game(true);
                        let celebration = match guess_count {
                            1 => "HOLE IN ONE! Extraordinary!",
                            2 => "MAGNIFICENT! Two guesses!",
                            3 => "SPLENDID! Three guesses!",
                            4 => "GREAT JOB! Four guesses!",
                            5 => "NICE WORK! Five guesses!",
                            _ => "PHEW! Got it!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::Lost => {
                        self.record_game(false);
                        let text = format!(
                            "Out of tries! The word was {}.",
                            self.session.secret().text().to_uppercase()
                        );
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::InProgress => {
                        let text = format!(
                            "{} {} | {} tries left",
                            input.trim().to_uppercase(),
                            feedback.to_emoji(),
                            self.session.remaining_tries()
                        );
                        self.add_message(&text, MessageStyle::Info);
                    }
                }
            }
            Err(e) if e.is_recoverable() => {
                self.add_message(&format!("{e}"), MessageStyle::Error);
            }
            Err(e) => self.add_message(&format!("Error: {e}"), MessageStyle::Error),
        }
    }

    fn record_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            let guess_count = self.session.history().len();
            if guess_count < self.stats.guess_distribution.len() {
                self.stats.guess_distribution[guess_count] += 1;
            }
        }
        self.input_mode = InputMode::GameOver;
    }

    /// Ask the solver for the best guess given the session so far
    pub fn compute_hint(&mut self) {
        let best = self
            .session
            .solver_for(self.candidates)
            .and_then(|solver| {
                let remaining = solver.remaining().len();
                solver.remaining().best_entry().map(|entry| HintInfo {
                    word: entry.word.text().to_string(),
                    score: entry.score,
                    remaining,
                })
            });

        match best {
            Ok(hint) => {
                let text = format!("Hint: try {}", hint.word.to_uppercase());
                self.hint = Some(hint);
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => {
                self.hint = None;
                self.add_message(&format!("No hint: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Start a new game with a random secret
    pub fn new_game(&mut self) {
        match GameSession::random(self.dictionary, self.session.tries(), &mut rand::rng()) {
            Ok(session) => {
                self.session = session;
                self.hint = None;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("Error: {e}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best known status of every letter, for the keyboard panel
    ///
    /// A letter shows the strongest feedback it has received: match over
    /// present over absent.
    #[must_use]
    pub fn letter_states(&self) -> [Option<FeedbackSymbol>; 26] {
        let mut states = [None; 26];
        for (word, feedback) in self.session.history() {
            for (i, &symbol) in feedback.symbols().iter().enumerate() {
                let slot = &mut states[usize::from(word.char_at(i) - b'a')];
                *slot = Some(match (*slot, symbol) {
                    (Some(FeedbackSymbol::Match), _) | (_, FeedbackSymbol::Match) => {
                        FeedbackSymbol::Match
                    }
                    (Some(FeedbackSymbol::Present), _) | (_, FeedbackSymbol::Present) => {
                        FeedbackSymbol::Present
                    }
                    _ => FeedbackSymbol::Absent,
                });
            }
        }
        states
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.compute_hint(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < 5 {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{LetterStatistics, WordScorer};

    fn fixtures() -> (Vec<Word>, CandidateSet) {
        let stats =
            LetterStatistics::parse("a,8 c,4 e,11 g,2 i,7 l,5 n,6 r,7 s,5 t,6").unwrap();
        let dictionary: Vec<Word> = ["irate", "crane", "grate", "slate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let candidates = CandidateSet::new(&dictionary, &WordScorer::new(&stats)).unwrap();
        (dictionary, candidates)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn typing_a_guess_records_it() {
        let (dictionary, candidates) = fixtures();
        let session = GameSession::new(Word::new("grate").unwrap(), 6);
        let mut app = App::new(&dictionary, &candidates, session);

        type_word(&mut app, "crane");
        assert_eq!(app.session.history().len(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn short_guess_is_rejected_without_using_a_try() {
        let (dictionary, candidates) = fixtures();
        let session = GameSession::new(Word::new("grate").unwrap(), 6);
        let mut app = App::new(&dictionary, &candidates, session);

        type_word(&mut app, "cra");
        assert_eq!(app.session.remaining_tries(), 6);
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn input_is_capped_at_five_letters() {
        let (dictionary, candidates) = fixtures();
        let session = GameSession::new(Word::new("grate").unwrap(), 6);
        let mut app = App::new(&dictionary, &candidates, session);

        for c in "cranes1".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        assert_eq!(app.input_buffer, "crane");
    }

    #[test]
    fn winning_switches_to_game_over() {
        let (dictionary, candidates) = fixtures();
        let session = GameSession::new(Word::new("grate").unwrap(), 6);
        let mut app = App::new(&dictionary, &candidates, session);

        type_word(&mut app, "grate");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.session.history().is_empty());
        assert!(dictionary.contains(app.session.secret()));
    }

    #[test]
    fn hint_follows_history() {
        let (dictionary, candidates) = fixtures();
        let session = GameSession::new(Word::new("grate").unwrap(), 6);
        let mut app = App::new(&dictionary, &candidates, session);

        type_word(&mut app, "crane");
        app.handle_key(KeyEvent::from(KeyCode::Tab));

        let hint = app.hint.as_ref().unwrap();
        assert_eq!(hint.word, "irate");
        assert_eq!(hint.remaining, 2);
    }

    #[test]
    fn letter_states_prefer_strongest_feedback() {
        let (dictionary, candidates) = fixtures();
        let session = GameSession::new(Word::new("grate").unwrap(), 6);
        let mut app = App::new(&dictionary, &candidates, session);

        type_word(&mut app, "trace");
        type_word(&mut app, "irate");
        let states = app.letter_states();

        // T was present in TRACE and matched in IRATE
        assert_eq!(states[usize::from(b't' - b'a')], Some(FeedbackSymbol::Match));
        assert_eq!(states[usize::from(b'c' - b'a')], Some(FeedbackSymbol::Absent));
        assert_eq!(states[usize::from(b'z' - b'a')], None);
    }

    #[test]
    fn quit_keys() {
        let (dictionary, candidates) = fixtures();
        let session = GameSession::new(Word::new("grate").unwrap(), 6);
        let mut app = App::new(&dictionary, &candidates, session);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
