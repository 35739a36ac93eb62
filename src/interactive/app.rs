//! TUI application state and logic

use super::rendering::{self, cell_at};
use crate::catalog::Catalog;
use crate::core::{GRID_SIZE, WORD_LEN, WordSetDefinition};
use crate::engine::{Action, ActionOutcome, Round, format_time};
use crate::prefs::PreferenceStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait between redraws when no task is due
const FRAME_INTERVAL: Duration = Duration::from_millis(250);
/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

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

/// Results over the session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_solved: usize,
    pub best_time: Option<u32>,
}

/// Application state
pub struct App<'a> {
    pub catalog: &'a Catalog,
    pub round: Round,
    pub prefs: Box<dyn PreferenceStore>,
    pub share_url: String,
    pub cursor: usize,
    pub show_rules: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    outcome_recorded: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        catalog: &'a Catalog,
        set: WordSetDefinition,
        prefs: Box<dyn PreferenceStore>,
        share_url: impl Into<String>,
    ) -> Self {
        let mut app = Self {
            catalog,
            round: Round::new(set),
            prefs,
            share_url: share_url.into(),
            cursor: 0,
            show_rules: false,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            outcome_recorded: false,
        };
        app.add_message(
            "Find the five words. Arrows move, Space selects, ? shows the rules.",
            MessageStyle::Info,
        );
        app
    }

    /// 1-based position of the current set in the catalog
    #[must_use]
    pub fn set_number(&self) -> usize {
        self.catalog.position(self.round.set().id()).unwrap_or(0) + 1
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode()
    }

    pub fn toggle_dark_mode(&mut self) {
        let enabled = !self.prefs.dark_mode();
        if let Err(e) = self.prefs.set_dark_mode(enabled) {
            warn!("Could not save preferences: {e}");
            self.add_message("Could not save preferences", MessageStyle::Error);
        }
    }

    pub fn toggle_rules(&mut self) {
        self.show_rules = !self.show_rules;
    }

    /// Move the cursor by whole cells, wrapping inside the grid
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let side = WORD_LEN as isize;
        let row = (self.cursor / WORD_LEN) as isize;
        let col = (self.cursor % WORD_LEN) as isize;
        let row = (row + dy).rem_euclid(side);
        let col = (col + dx).rem_euclid(side);
        // Cast is safe: rem_euclid keeps both in [0, side)
        self.cursor = (row * side + col) as usize;
    }

    /// Apply an action and report it in the message log
    ///
    /// # Errors
    ///
    /// Returns an error if the round's grid is found corrupted.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        let outcome = self.round.apply(action)?;
        match outcome {
            ActionOutcome::Ignored | ActionOutcome::Selected | ActionOutcome::Deselected => {}
            ActionOutcome::Solved(word) => {
                let found = self.round.solved_words().len();
                self.add_message(&format!("Found {word} ({found}/5)"), MessageStyle::Success);
            }
            ActionOutcome::Rejected(attempt) => {
                self.add_message(&format!("{attempt} is not one of the words"), MessageStyle::Error);
            }
            ActionOutcome::Hinted(Some(_)) => {
                self.add_message("A word starts on the highlighted cell", MessageStyle::Info);
            }
            ActionOutcome::Hinted(None) => {
                self.add_message("No hint available", MessageStyle::Error);
            }
            ActionOutcome::Shuffled => self.add_message("Shuffled", MessageStyle::Info),
            ActionOutcome::Paused => self.add_message("Paused", MessageStyle::Info),
            ActionOutcome::Resumed => self.add_message("Resumed", MessageStyle::Info),
        }
        Ok(())
    }

    /// Feed elapsed wall time into the round
    pub fn tick(&mut self, elapsed: Duration) {
        self.round.advance(elapsed);
        self.record_outcome();
    }

    fn record_outcome(&mut self) {
        if self.outcome_recorded {
            return;
        }
        let Some(outcome) = self.round.outcome() else {
            return;
        };
        self.outcome_recorded = true;
        self.stats.rounds_played += 1;

        if outcome.timed_out {
            let found = outcome.solved_words.len();
            self.add_message(&format!("Time's up! {found} of 5 found"), MessageStyle::Error);
        } else {
            let time = outcome.time_taken;
            self.stats.rounds_solved += 1;
            self.stats.best_time = Some(self.stats.best_time.map_or(time, |best| best.min(time)));
            self.add_message(
                &format!("Solved in {}!", format_time(time)),
                MessageStyle::Success,
            );
        }
        self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a new round on a different set
    pub fn play_again(&mut self) {
        let next = self
            .catalog
            .pick_other(self.round.set().id(), &mut rand::rng())
            .clone();
        info!("Switching to set {}", next.id());
        self.round.start_round(next);
        self.cursor = 0;
        self.show_rules = false;
        self.outcome_recorded = false;
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if an action finds the grid corrupted.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.show_rules {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | ' ')
            ) {
                self.show_rules = false;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.toggle_rules(),
            KeyCode::Char('d') => self.toggle_dark_mode(),
            KeyCode::Char('n') => self.play_again(),
            // The result overlay only takes the keys above
            _ if self.round.outcome().is_some() => {}
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.apply(Action::SelectCell(self.cursor))?,
            KeyCode::Char('h') => self.apply(Action::Hint)?,
            KeyCode::Char('s') => self.apply(Action::Solve)?,
            KeyCode::Char('r') => self.apply(Action::Shuffle)?,
            KeyCode::Char('p') => self.apply(Action::TogglePause)?,
            _ => {}
        }
        Ok(())
    }

    /// Handle a left click at a terminal coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if an action finds the grid corrupted.
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) -> Result<()> {
        if self.show_rules || self.round.outcome().is_some() {
            return Ok(());
        }
        if let Some(position) = cell_at(area, column, row).filter(|&p| p < GRID_SIZE) {
            self.cursor = position;
            self.apply(Action::SelectCell(position))?;
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last = Instant::now();

    loop {
        terminal.draw(|f| rendering::ui(f, &app))?;

        let timeout = app
            .round
            .time_to_next_event()
            .map_or(FRAME_INTERVAL, |due| due.min(FRAME_INTERVAL));
        let event = if event::poll(timeout)? {
            Some(event::read()?)
        } else {
            None
        };

        // Catch up on the clock before the input lands
        let now = Instant::now();
        app.tick(now - last);
        last = now;

        match event {
            // Only process key press events (fixes Windows double-input bug)
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
            Some(Event::Mouse(mouse)) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.handle_click(area, mouse.column, mouse.row)?;
            }
            _ => {}
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
    use crate::prefs::MemoryPreferences;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            WordSetDefinition::new(
                "colors",
                "Colors",
                &["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"],
            )
            .unwrap(),
            WordSetDefinition::new(
                "fruits",
                "Fruits",
                &["APPLE", "GRAPE", "LEMON", "MANGO", "PEACH"],
            )
            .unwrap(),
        ])
        .unwrap()
    }

    fn app(catalog: &Catalog) -> App<'_> {
        let set = catalog.sets()[0].clone();
        App::new(catalog, set, Box::new(MemoryPreferences::default()), "https://example.com/")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn cursor_wraps_around_grid() {
        let catalog = catalog();
        let mut app = app(&catalog);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 4);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 24);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 20);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn space_selects_cursor_cell() {
        let catalog = catalog();
        let mut app = app(&catalog);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.round.selection().positions(), &[1]);
    }

    #[test]
    fn solving_everything_records_the_outcome_once() {
        let catalog = catalog();
        let mut app = app(&catalog);
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('s'));
        }
        app.tick(Duration::from_secs(1));
        app.tick(Duration::from_secs(1));
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_solved, 1);
        assert_eq!(app.stats.best_time, Some(0));
        assert!(app.round.share_message(&app.share_url).is_some());

        // Play keys are ignored while the result is shown
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.round.hint(), None);
    }

    #[test]
    fn play_again_switches_set() {
        let catalog = catalog();
        let mut app = app(&catalog);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.round.set().id(), "fruits");
        assert_eq!(app.set_number(), 2);
        assert!(app.round.solved_words().is_empty());
    }

    #[test]
    fn rules_overlay_swallows_keys() {
        let catalog = catalog();
        let mut app = app(&catalog);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_rules);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_rules);
    }

    #[test]
    fn dark_mode_toggles_through_store() {
        let catalog = catalog();
        let mut app = app(&catalog);
        assert!(!app.dark_mode());
        press(&mut app, KeyCode::Char('d'));
        assert!(app.dark_mode());
    }

    #[test]
    fn messages_are_capped() {
        let catalog = catalog();
        let mut app = app(&catalog);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('r'));
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }

    #[test]
    fn ctrl_c_quits() {
        let catalog = catalog();
        let mut app = app(&catalog);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }
}
