//! TUI application state and logic

use crate::core::Peg;
use crate::game::{Game, GameState};
use crate::output::formatters::{attempts_phrase, describe_code};
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

const NEXT_GAME_HINT: &str = "Press 'n' for new game or 'q' to quit.";

/// Color scheme of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Application state
pub struct App {
    pub game: Game,
    pub current_guess: Vec<Option<Peg>>,
    pub messages: Vec<Message>,
    pub accessible: bool,
    pub theme: Theme,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(game: Game, accessible: bool) -> Self {
        let code_length = game.session().code_length();
        let mut app = Self {
            game,
            current_guess: vec![None; code_length],
            messages: Vec::new(),
            accessible,
            theme: Theme::default(),
            should_quit: false,
        };
        app.announce_new_game();
        app
    }

    /// Place a peg in the first empty slot, or over the last slot when full
    pub fn select_peg(&mut self, peg: Peg) {
        if self.game.session().state().is_terminal() {
            return;
        }
        if let Some(slot) = self.current_guess.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(peg);
        } else if let Some(last) = self.current_guess.last_mut() {
            *last = Some(peg);
        }
    }

    /// Remove the most recently placed peg
    pub fn remove_last_peg(&mut self) {
        if let Some(slot) = self.current_guess.iter_mut().rev().find(|slot| slot.is_some()) {
            *slot = None;
        }
    }

    pub fn clear_guess(&mut self) {
        self.current_guess = vec![None; self.game.session().code_length()];
    }

    #[must_use]
    pub fn guess_is_complete(&self) -> bool {
        self.current_guess.iter().all(Option::is_some)
    }

    pub fn submit_guess(&mut self) {
        let pegs: Option<Vec<u8>> = self
            .current_guess
            .iter()
            .map(|slot| slot.map(Peg::id))
            .collect();
        let Some(pegs) = pegs else {
            let length = self.current_guess.len();
            self.add_message(&format!("Fill all {length} slots first!"), MessageStyle::Error);
            return;
        };

        match self.game.submit_guess(&pegs) {
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            Ok(outcome) => {
                self.clear_guess();
                let session = self.game.session();
                let used = session.attempts_used();
                let remaining = session.attempts_remaining();
                let secret = describe_code(session.reveal_secret(), self.accessible);
                let guess = session
                    .history()
                    .last()
                    .map(|record| describe_code(record.guess(), self.accessible))
                    .unwrap_or_default();

                match outcome.state {
                    GameState::Won => {
                        let difficulty = self.game.difficulty().name();
                        self.add_message(
                            &format!(
                                "🎉 You cracked the {difficulty} code in {}!",
                                attempts_phrase(used)
                            ),
                            MessageStyle::Success,
                        );
                        self.add_message(NEXT_GAME_HINT, MessageStyle::Info);
                    }
                    GameState::Lost => {
                        self.add_message(
                            &format!("Game over! The code was: {secret}"),
                            MessageStyle::Error,
                        );
                        self.add_message(NEXT_GAME_HINT, MessageStyle::Info);
                    }
                    GameState::InProgress => {
                        self.add_message(
                            &format!(
                                "{guess}: {} correct position, {} correct color. {} left.",
                                outcome.feedback.exact(),
                                outcome.feedback.partial(),
                                attempts_phrase(remaining)
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        let difficulty = self.game.difficulty();
        self.game.start_game(difficulty);
        self.clear_guess();
        self.announce_new_game();
    }

    /// Switch to the next difficulty and restart
    pub fn cycle_difficulty(&mut self) {
        let difficulty = self.game.difficulty().next();
        self.game.start_game(difficulty);
        self.clear_guess();
        self.announce_new_game();
    }

    pub fn toggle_accessibility(&mut self) {
        self.accessible = !self.accessible;
        let state = if self.accessible { "on" } else { "off" };
        self.add_message(&format!("Number labels {state}"), MessageStyle::Info);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    fn announce_new_game(&mut self) {
        let rules = self.game.session().rules();
        self.add_message(
            &format!(
                "New {} game! Select {} colors (keys 0-9). {}.",
                self.game.difficulty().name(),
                rules.code_length(),
                attempts_phrase(rules.max_attempts())
            ),
            MessageStyle::Info,
        );
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ '0'..='9') => {
                if let Some(peg) = c
                    .to_digit(10)
                    .and_then(|digit| Peg::new(digit as u8).ok())
                {
                    self.select_peg(peg);
                }
            }
            KeyCode::Backspace => self.remove_last_peg(),
            KeyCode::Char('c') => self.clear_guess(),
            KeyCode::Enter => {
                if !self.game.session().state().is_terminal() {
                    self.submit_guess();
                }
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Tab => self.cycle_difficulty(),
            KeyCode::Char('a') => self.toggle_accessibility(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
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
    use crate::core::Difficulty;

    fn app_with_secret(secret: &str) -> App {
        let mut game = Game::with_seed(Difficulty::Easy, 0);
        game.start_with_secret(Difficulty::Easy, secret.parse().unwrap())
            .unwrap();
        App::new(game, false)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_code(app: &mut App, digits: &str) {
        for c in digits.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn slots(app: &App) -> Vec<Option<u8>> {
        app.current_guess.iter().map(|slot| slot.map(Peg::id)).collect()
    }

    #[test]
    fn digits_fill_slots_then_replace_last() {
        let mut app = app_with_secret("1234");
        type_code(&mut app, "567");
        assert_eq!(slots(&app), vec![Some(5), Some(6), Some(7), None]);

        type_code(&mut app, "89");
        assert_eq!(slots(&app), vec![Some(5), Some(6), Some(7), Some(9)]);
    }

    #[test]
    fn backspace_and_clear() {
        let mut app = app_with_secret("1234");
        type_code(&mut app, "12");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(slots(&app), vec![Some(1), None, None, None]);

        type_code(&mut app, "234");
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(slots(&app), vec![None; 4]);
    }

    #[test]
    fn incomplete_guess_is_not_submitted() {
        let mut app = app_with_secret("1234");
        type_code(&mut app, "12");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.session().attempts_used(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn submit_scores_and_clears() {
        let mut app = app_with_secret("1234");
        type_code(&mut app, "1243");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.session().attempts_used(), 1);
        assert_eq!(slots(&app), vec![None; 4]);
        let last = &app.messages.last().unwrap().text;
        assert!(last.starts_with("Red, Orange, Green, Yellow: 2 correct position, 2 correct"));
    }

    #[test]
    fn progress_message_names_the_submitted_guess() {
        let mut app = app_with_secret("1234");
        app.toggle_accessibility();
        type_code(&mut app, "9876");
        press(&mut app, KeyCode::Enter);

        let last = &app.messages.last().unwrap().text;
        assert_eq!(last, "9876: 0 correct position, 0 correct color. 9 attempts left.");
    }

    #[test]
    fn winning_records_statistics_and_locks_input() {
        let mut app = app_with_secret("1234");
        type_code(&mut app, "1234");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.session().state(), GameState::Won);
        assert_eq!(app.game.statistics().best_score(), Some(1));

        type_code(&mut app, "1234");
        press(&mut app, KeyCode::Enter);
        assert_eq!(slots(&app), vec![None; 4]);
        assert_eq!(app.game.statistics().games_played(), 1);
    }

    #[test]
    fn losing_reveals_secret() {
        let mut app = app_with_secret("1234");
        app.accessible = true;
        for _ in 0..10 {
            type_code(&mut app, "0000");
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.game.session().state(), GameState::Lost);
        assert!(
            app.messages
                .iter()
                .any(|msg| msg.text.contains("The code was: 1234"))
        );
    }

    #[test]
    fn tab_cycles_difficulty_and_resizes_guess() {
        let mut app = app_with_secret("1234");
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.game.difficulty(), Difficulty::Hard);
        assert_eq!(app.current_guess.len(), 6);
    }

    #[test]
    fn toggles() {
        let mut app = app_with_secret("1234");
        press(&mut app, KeyCode::Char('a'));
        assert!(app.accessible);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Light);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with_secret("1234");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = app_with_secret("1234");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with_secret("1234");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
