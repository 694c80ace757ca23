//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::driver::GameDriver;
use crate::game::{
    Clock, ClueKind, ContinueOutcome, DailyTicker, GameError, GameStatus, Rollover,
};
use crate::store::KeyValueStore;
use crate::wordlists::{DICTIONARY_FALLBACK, DictionaryUnavailable};
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
use std::time::{Duration, Instant};

const MAX_NAME_LEN: usize = 20;
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S, C> {
    pub driver: GameDriver<S, C>,
    pub input_buffer: String,
    pub name_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub panel: Panel,
    pub should_quit: bool,
    ticker: DailyTicker,
    /// A rollover check came due while a name was being typed
    tick_deferred: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing letters into the current row
    Guess,
    /// Entering a leaderboard name after a win
    NamePrompt,
    /// No game running: continue, restart or switch mode
    Menu,
}

/// What the side panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Help,
    Leaderboard,
    History,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    /// A failed dictionary load becomes the first message on screen
    #[must_use]
    pub fn new(
        driver: GameDriver<S, C>,
        dictionary_warning: Option<&DictionaryUnavailable>,
    ) -> Self {
        let interval = Duration::from_secs(driver.session().config().tick_seconds.max(1));
        let mut messages = Vec::with_capacity(MAX_MESSAGES);
        if dictionary_warning.is_some() {
            messages.push(Message {
                text: DICTIONARY_FALLBACK.to_string(),
                style: MessageStyle::Error,
            });
        }
        messages.push(Message {
            text: "Welcome! Guess the five-letter word.".to_string(),
            style: MessageStyle::Info,
        });
        Self {
            driver,
            input_buffer: String::new(),
            name_buffer: String::new(),
            messages,
            input_mode: InputMode::Menu,
            panel: Panel::Help,
            should_quit: false,
            ticker: DailyTicker::new(interval, Instant::now()),
            tick_deferred: false,
        }
    }

    /// Start the first game
    pub fn start(&mut self) {
        let result = self.driver.start_game();
        self.report_new_game(result);
    }

    fn report_new_game(&mut self, result: Result<(), GameError>) {
        self.input_buffer.clear();
        match result {
            Ok(()) => {
                let mode = self.driver.session().mode().label();
                self.add_message(&format!("New {mode} game started!"), MessageStyle::Info);
            }
            Err(GameError::DailyAlreadyPlayed(_)) => {
                self.add_message(
                    "Today's puzzle is done. Press Tab for random games.",
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.follow_status();
    }

    fn follow_status(&mut self) {
        self.input_mode = if self.driver.session().status() == GameStatus::InProgress {
            InputMode::Guess
        } else {
            InputMode::Menu
        };
    }

    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() < WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        let outcome = match self.driver.guess(&guess) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = guess;
                return;
            }
        };

        if outcome.points > 0 {
            self.add_message(
                &format!("+{} for new letters", outcome.points),
                MessageStyle::Success,
            );
        }

        let Some(summary) = outcome.summary else {
            return;
        };
        if summary.win {
            let celebration = match summary.attempts {
                1 => "HOLE IN ONE!",
                2 => "Magnificent!",
                3 => "Splendid!",
                4 => "Great job!",
                5 => "Nice work!",
                _ => "Phew!",
            };
            self.add_message(
                &format!("{celebration} +{} points", summary.score_earned),
                MessageStyle::Success,
            );
            self.add_message("Enter a name for the leaderboard", MessageStyle::Info);
            self.name_buffer.clear();
            self.input_mode = InputMode::NamePrompt;
        } else {
            self.add_message(
                &format!("Out of guesses. The word was {}", summary.target),
                MessageStyle::Error,
            );
            self.input_mode = InputMode::Menu;
        }
    }

    pub fn submit_name(&mut self) {
        let name = std::mem::take(&mut self.name_buffer);
        if let Some(rank) = self.driver.save_to_leaderboard(&name) {
            self.add_message(&format!("Leaderboard rank #{}", rank + 1), MessageStyle::Success);
            self.panel = Panel::Leaderboard;
        }
        self.input_mode = InputMode::Menu;
    }

    pub fn buy_clue(&mut self, kind: ClueKind) {
        match self.driver.buy_clue(kind) {
            Ok(clue) => self.add_message(&clue.to_string(), MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        let result = self.driver.start_game();
        self.report_new_game(result);
    }

    pub fn toggle_mode(&mut self) {
        let result = self.driver.toggle_mode().map(|_| ());
        self.report_new_game(result);
    }

    pub fn continue_game(&mut self) {
        match self.driver.continue_game() {
            Ok(ContinueOutcome::Started { cost }) => {
                self.input_buffer.clear();
                if cost > 0 {
                    self.add_message(
                        &format!("Paid {cost} points to keep going"),
                        MessageStyle::Info,
                    );
                }
                self.add_message("Next game started!", MessageStyle::Info);
            }
            Ok(ContinueOutcome::Bankrupt) => self.add_message(
                "Not enough points to continue. Score and streak reset; press r.",
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.follow_status();
    }

    pub fn restart(&mut self) {
        let result = self.driver.restart();
        self.report_new_game(result);
    }

    /// Run the daily rollover check if the ticker is due
    ///
    /// While the leaderboard name prompt is open the check is held back and runs on
    /// the first tick after the prompt closes.
    pub fn on_tick(&mut self, now: Instant) {
        let due = self.ticker.due(now);
        if self.input_mode == InputMode::NamePrompt {
            self.tick_deferred |= due;
            return;
        }
        let deferred = std::mem::take(&mut self.tick_deferred);
        if !due && !deferred {
            return;
        }
        if self.driver.tick() == Rollover::Started {
            self.input_buffer.clear();
            self.add_message("A new daily puzzle is here!", MessageStyle::Success);
            self.follow_status();
        }
    }

    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.remaining(now).min(Duration::from_secs(1))
    }

    fn cycle_panel(&mut self, panel: Panel) {
        self.panel = if self.panel == panel {
            Panel::Help
        } else {
            panel
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(2) => {
                self.cycle_panel(Panel::Leaderboard);
                return;
            }
            KeyCode::F(3) => {
                self.cycle_panel(Panel::History);
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Char('r') if ctrl => self.restart(),
                KeyCode::Tab => self.toggle_mode(),
                KeyCode::Char('1') => self.buy_clue(ClueKind::RevealPosition),
                KeyCode::Char('2') => self.buy_clue(ClueKind::RevealRandom),
                KeyCode::Char('3') => self.buy_clue(ClueKind::RevealVowel),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::NamePrompt => match key.code {
                KeyCode::Esc => {
                    self.name_buffer.clear();
                    self.input_mode = InputMode::Menu;
                }
                KeyCode::Char(c) if !c.is_control() => {
                    if self.name_buffer.chars().count() < MAX_NAME_LEN {
                        self.name_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.name_buffer.pop();
                }
                KeyCode::Enter => self.submit_name(),
                _ => {}
            },
            InputMode::Menu => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('c') => self.continue_game(),
                KeyCode::Char('r') => self.restart(),
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('m') | KeyCode::Tab => self.toggle_mode(),
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
pub fn run_tui<S: KeyValueStore, C: Clock>(app: App<S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, C: Clock>(
    terminal: &mut Terminal<B>,
    mut app: App<S, C>,
) -> Result<()> {
    app.start();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
