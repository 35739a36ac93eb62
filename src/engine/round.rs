//! Round orchestrator
//!
//! A `Round` owns every piece of state for one play-through of a word set:
//! the grid, the current selection, the solved words, the timer and the
//! queue of deferred tasks. Input arrives as [`Action`]s and the passage of
//! time as [`Round::advance`]; each call completes all of its state changes
//! before returning, and the presentation layer reads [`Round::snapshot`].

use super::assist::{hint_position, pick_remaining, remaining_words};
use super::schedule::{Scheduler, Task, TaskHandle};
use super::share::share_message;
use super::snapshot::{RoundOutcome, RoundSnapshot};
use crate::core::{Grid, GridError, RoundTimer, Selection, Tick, Toggle, Word, WordSetDefinition};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use thiserror::Error;

/// Interval between timer ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// How long a hint stays highlighted
pub const HINT_DURATION: Duration = Duration::from_secs(2);
/// How long a rejected attempt stays on screen
pub const ERROR_DURATION: Duration = Duration::from_secs(1);
/// Delay between pinning the last word and revealing the outcome
pub const REVEAL_DELAY: Duration = Duration::from_secs(1);

/// Player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectCell(usize),
    Hint,
    Solve,
    Shuffle,
    TogglePause,
}

/// What an action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Stale or out-of-range input; nothing changed
    Ignored,
    Selected,
    Deselected,
    /// A word was pinned, by a correct selection or by an assist
    Solved(Word),
    /// Five letters that are not a remaining word
    Rejected(String),
    /// Hint issued; the highlighted cell, if one was found
    Hinted(Option<usize>),
    Shuffled,
    Paused,
    Resumed,
}

#[derive(Debug, Error)]
pub enum RoundError {
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Handles of the tasks a round may have queued
#[derive(Debug, Default)]
struct Tasks {
    tick: Option<TaskHandle>,
    hint: Option<TaskHandle>,
    error: Option<TaskHandle>,
    reveal: Option<TaskHandle>,
}

/// Time each deferred task still had to wait when the round was paused
#[derive(Debug, Default)]
struct Frozen {
    tick: Option<Duration>,
    hint: Option<Duration>,
    error: Option<Duration>,
}

/// One round of the puzzle
pub struct Round {
    set: WordSetDefinition,
    grid: Grid,
    selection: Selection,
    solved: Vec<Word>,
    timer: RoundTimer,
    hint: Option<usize>,
    outcome: Option<RoundOutcome>,
    pending_outcome: Option<RoundOutcome>,
    scheduler: Scheduler,
    tasks: Tasks,
    frozen: Frozen,
    rng: StdRng,
}

impl Round {
    /// Start a round with a randomly seeded generator
    #[must_use]
    pub fn new(set: WordSetDefinition) -> Self {
        Self::with_rng(set, StdRng::from_rng(&mut rand::rng()))
    }

    /// Start a round with a fixed seed (deterministic shuffles and picks)
    #[must_use]
    pub fn with_seed(set: WordSetDefinition, seed: u64) -> Self {
        Self::with_rng(set, StdRng::seed_from_u64(seed))
    }

    fn with_rng(set: WordSetDefinition, mut rng: StdRng) -> Self {
        let grid = Grid::initialize(&set, &mut rng);
        let mut round = Self {
            set,
            grid,
            selection: Selection::new(),
            solved: Vec::new(),
            timer: RoundTimer::default(),
            hint: None,
            outcome: None,
            pending_outcome: None,
            scheduler: Scheduler::new(),
            tasks: Tasks::default(),
            frozen: Frozen::default(),
            rng,
        };
        round.tasks.tick = Some(round.scheduler.schedule(TICK_INTERVAL, Task::Tick));
        info!("Round started: {} ({})", round.set.id(), round.set.theme());
        round
    }

    /// Discard all state and start over with `set`
    ///
    /// Every pending task of the previous round is cancelled.
    pub fn start_round(&mut self, set: WordSetDefinition) {
        let seed = StdRng::from_rng(&mut self.rng);
        *self = Self::with_rng(set, seed);
    }

    /// Replace the shuffled grid with a fixed layout of the same letters
    ///
    /// Returns `false` (and changes nothing) if the layout is not a
    /// permutation of the set's letters, a word is already solved, or the
    /// round is paused or over.
    #[cfg(test)]
    pub(crate) fn set_layout(&mut self, letters: &[u8]) -> bool {
        let Some(grid) = Grid::from_letters(letters) else {
            return false;
        };
        if !grid.is_permutation_of(&self.set)
            || self.grid.solved_count() > 0
            || !self.accepts_input()
        {
            return false;
        }
        self.grid = grid;
        self.selection.clear();
        self.clear_hint();
        true
    }

    #[must_use]
    pub const fn set(&self) -> &WordSetDefinition {
        &self.set
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn solved_words(&self) -> &[Word] {
        &self.solved
    }

    #[must_use]
    pub fn remaining_words(&self) -> Vec<&Word> {
        remaining_words(&self.set, &self.solved)
    }

    #[must_use]
    pub const fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    #[must_use]
    pub const fn hint(&self) -> Option<usize> {
        self.hint
    }

    /// Revealed outcome, if the round is over and the reveal delay has passed
    #[must_use]
    pub const fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    /// Time ran out or every word is solved
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    /// Logical time since the round started
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// How long until the next deferred task is due
    #[must_use]
    pub fn time_to_next_event(&self) -> Option<Duration> {
        self.scheduler.time_to_next()
    }

    /// Share text for a solved round
    ///
    /// Available once the outcome is revealed and the round was not lost to
    /// the clock.
    #[must_use]
    pub fn share_message(&self, base_url: &str) -> Option<String> {
        self.outcome
            .as_ref()
            .filter(|outcome| !outcome.timed_out)
            .map(|outcome| share_message(&self.set, outcome.time_taken, base_url))
    }

    /// Apply one player action
    ///
    /// # Errors
    /// Returns `RoundError::Grid` if pinning a word finds the grid corrupted.
    /// The round should be abandoned in that case.
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, RoundError> {
        match action {
            Action::SelectCell(position) => self.select(position),
            Action::Hint => Ok(self.give_hint()),
            Action::Solve => self.solve(),
            Action::Shuffle => Ok(self.shuffle()),
            Action::TogglePause => Ok(self.toggle_pause()),
        }
    }

    /// Move the clock forward, firing every task that falls due
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.scheduler.now() + elapsed;
        while let Some(task) = self.scheduler.pop_due(target) {
            self.fire(task);
        }
        self.scheduler.advance_to(target);
    }

    /// Read-only view for presentation
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            set_id: self.set.id().to_string(),
            theme: self.set.theme().to_string(),
            letters: self.grid.letters().iter().map(|&b| char::from(b)).collect(),
            solved_count: self.grid.solved_count(),
            solved_words: self.solved.iter().map(|w| w.text().to_string()).collect(),
            selected: self.selection.positions().to_vec(),
            error: self.selection.has_error(),
            hint: self.hint,
            elapsed: self.timer.elapsed(),
            time_left: self.timer.remaining(),
            timer_state: self.timer.state(),
            outcome: self.outcome.clone(),
        }
    }

    fn accepts_input(&self) -> bool {
        !self.is_paused() && !self.is_finished()
    }

    fn select(&mut self, position: usize) -> Result<ActionOutcome, RoundError> {
        if !self.accepts_input() {
            return Ok(ActionOutcome::Ignored);
        }

        match self.selection.toggle(position, &self.grid) {
            Toggle::Ignored => Ok(ActionOutcome::Ignored),
            Toggle::Removed => {
                self.clear_hint();
                Ok(ActionOutcome::Deselected)
            }
            Toggle::Added => {
                self.clear_hint();
                Ok(ActionOutcome::Selected)
            }
            Toggle::Completed(_) => {
                self.clear_hint();
                self.evaluate()
            }
        }
    }

    fn evaluate(&mut self) -> Result<ActionOutcome, RoundError> {
        let spelled = self.selection.spelled(&self.grid);
        let matched = self
            .remaining_words()
            .into_iter()
            .find(|word| word.matches(&spelled))
            .cloned();

        if let Some(word) = matched {
            self.accept(word.clone())?;
            return Ok(ActionOutcome::Solved(word));
        }

        let attempt = String::from_utf8_lossy(&spelled).into_owned();
        debug!("Rejected attempt {attempt}");
        self.selection.reject();
        cancel_task(&mut self.scheduler, &mut self.tasks.error);
        self.tasks.error = Some(self.scheduler.schedule(ERROR_DURATION, Task::ClearError));
        Ok(ActionOutcome::Rejected(attempt))
    }

    fn give_hint(&mut self) -> ActionOutcome {
        if !self.accepts_input() {
            return ActionOutcome::Ignored;
        }
        let Some(word) = pick_remaining(&self.set, &self.solved, &mut self.rng) else {
            return ActionOutcome::Ignored;
        };

        let position = hint_position(&self.grid, word);
        if position.is_none() {
            warn!(
                "No cell holds the first letter of {word}; grid letters: {}",
                String::from_utf8_lossy(self.grid.letters())
            );
        }
        debug!("Hint for {word}: {position:?}");

        cancel_task(&mut self.scheduler, &mut self.tasks.hint);
        self.hint = position;
        if position.is_some() {
            self.tasks.hint = Some(self.scheduler.schedule(HINT_DURATION, Task::ClearHint));
        }
        ActionOutcome::Hinted(position)
    }

    fn solve(&mut self) -> Result<ActionOutcome, RoundError> {
        if !self.accepts_input() {
            return Ok(ActionOutcome::Ignored);
        }
        let Some(word) = pick_remaining(&self.set, &self.solved, &mut self.rng).cloned() else {
            return Ok(ActionOutcome::Ignored);
        };
        self.accept(word.clone())?;
        Ok(ActionOutcome::Solved(word))
    }

    fn shuffle(&mut self) -> ActionOutcome {
        if !self.accepts_input() {
            return ActionOutcome::Ignored;
        }
        self.grid.reshuffle_active(&mut self.rng);
        self.clear_selection();
        self.clear_hint();
        ActionOutcome::Shuffled
    }

    fn toggle_pause(&mut self) -> ActionOutcome {
        if self.timer.pause() {
            // Hint and error clears freeze along with the clock
            self.frozen = Frozen {
                tick: take_remaining(&mut self.scheduler, &mut self.tasks.tick),
                hint: take_remaining(&mut self.scheduler, &mut self.tasks.hint),
                error: take_remaining(&mut self.scheduler, &mut self.tasks.error),
            };
            debug!("Paused at {}s", self.timer.elapsed());
            ActionOutcome::Paused
        } else if self.timer.resume() {
            let frozen = std::mem::take(&mut self.frozen);
            let delay = frozen.tick.unwrap_or(TICK_INTERVAL);
            self.tasks.tick = Some(self.scheduler.schedule(delay, Task::Tick));
            self.tasks.hint = frozen
                .hint
                .map(|delay| self.scheduler.schedule(delay, Task::ClearHint));
            self.tasks.error = frozen
                .error
                .map(|delay| self.scheduler.schedule(delay, Task::ClearError));
            debug!("Resumed at {}s", self.timer.elapsed());
            ActionOutcome::Resumed
        } else {
            ActionOutcome::Ignored
        }
    }

    /// Shared success path of a correct selection and of Solve
    fn accept(&mut self, word: Word) -> Result<(), RoundError> {
        self.grid.pin_word(&word)?;
        debug!("Solved {word}");
        self.solved.push(word);
        self.clear_selection();
        self.clear_hint();

        if self.grid.is_complete() {
            let time_taken = self.timer.stop();
            cancel_task(&mut self.scheduler, &mut self.tasks.tick);
            self.frozen = Frozen::default();
            info!("Round {} solved in {time_taken}s", self.set.id());
            self.pending_outcome = Some(RoundOutcome {
                solved_words: self.solved.clone(),
                time_taken,
                timed_out: false,
            });
            self.tasks.reveal = Some(self.scheduler.schedule(REVEAL_DELAY, Task::RevealOutcome));
        }
        Ok(())
    }

    fn fire(&mut self, task: Task) {
        match task {
            Task::Tick => {
                self.tasks.tick = None;
                match self.timer.tick() {
                    Tick::Advanced => {
                        self.tasks.tick = Some(self.scheduler.schedule(TICK_INTERVAL, Task::Tick));
                    }
                    Tick::Expired => {
                        info!(
                            "Round {} timed out with {} of 5 words",
                            self.set.id(),
                            self.solved.len()
                        );
                        self.outcome = Some(RoundOutcome {
                            solved_words: self.solved.clone(),
                            time_taken: self.timer.elapsed(),
                            timed_out: true,
                        });
                    }
                    Tick::Ignored => {}
                }
            }
            Task::ClearHint => {
                self.tasks.hint = None;
                self.hint = None;
            }
            Task::ClearError => {
                self.tasks.error = None;
                self.selection.clear();
            }
            Task::RevealOutcome => {
                self.tasks.reveal = None;
                self.outcome = self.pending_outcome.take();
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
        cancel_task(&mut self.scheduler, &mut self.tasks.error);
    }

    fn clear_hint(&mut self) {
        self.hint = None;
        cancel_task(&mut self.scheduler, &mut self.tasks.hint);
    }
}

fn cancel_task(scheduler: &mut Scheduler, slot: &mut Option<TaskHandle>) {
    if let Some(handle) = slot.take() {
        scheduler.cancel(handle);
    }
}

/// Cancel the task in `slot`, returning how long it still had to wait
fn take_remaining(scheduler: &mut Scheduler, slot: &mut Option<TaskHandle>) -> Option<Duration> {
    slot.take().and_then(|handle| scheduler.cancel(handle))
}

impl std::fmt::Debug for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("set", &self.set.id())
            .field("grid", &String::from_utf8_lossy(self.grid.letters()))
            .field("solved", &self.solved)
            .field("timer", &self.timer)
            .field("now", &self.scheduler.now())
            .finish_non_exhaustive()
    }
}
