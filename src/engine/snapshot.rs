//! Read-only view of a round for presentation

use crate::core::{TimerState, Word};

/// How a cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Part of the solved prefix
    Solved,
    /// Selected in a rejected attempt
    Error,
    Selected,
    Hinted,
    Plain,
}

/// Final result of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Words in the order they were solved
    pub solved_words: Vec<Word>,
    /// Seconds on the clock when the round ended
    pub time_taken: u32,
    pub timed_out: bool,
}

/// Everything the presentation layer needs to draw a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub set_id: String,
    pub theme: String,
    pub letters: Vec<char>,
    pub solved_count: usize,
    pub solved_words: Vec<String>,
    pub selected: Vec<usize>,
    pub error: bool,
    pub hint: Option<usize>,
    pub elapsed: u32,
    pub time_left: u32,
    pub timer_state: TimerState,
    /// Present once the outcome has been revealed
    pub outcome: Option<RoundOutcome>,
}

impl RoundSnapshot {
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.timer_state == TimerState::Paused
    }

    #[must_use]
    pub fn prefix_len(&self) -> usize {
        self.solved_count * crate::core::WORD_LEN
    }

    #[must_use]
    pub fn cell_state(&self, position: usize) -> CellState {
        if position < self.prefix_len() {
            CellState::Solved
        } else if self.selected.contains(&position) {
            if self.error {
                CellState::Error
            } else {
                CellState::Selected
            }
        } else if self.hint == Some(position) {
            CellState::Hinted
        } else {
            CellState::Plain
        }
    }

    /// Letters picked so far in the current attempt
    #[must_use]
    pub fn attempt(&self) -> String {
        self.selected
            .iter()
            .filter_map(|&p| self.letters.get(p))
            .collect()
    }
}
