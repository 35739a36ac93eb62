//! Selection state machine
//!
//! Tracks the cells picked for the current attempt. Deciding whether a
//! completed attempt spells a remaining word is left to the round, which owns
//! the word list; this type only knows positions.

use super::grid::Grid;
use super::word::WORD_LEN;

/// Where the current attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected
    Idle,
    /// 1 to 4 cells selected
    Selecting,
    /// 5 cells selected and rejected; waiting for the error cue to clear
    Evaluating,
}

/// Result of toggling a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Cell is in the solved prefix, out of range, or an attempt is being evaluated
    Ignored,
    /// Cell was selected and has been removed
    Removed,
    /// Cell was appended; fewer than 5 are selected
    Added,
    /// Cell was appended and completes an attempt of 5 positions
    Completed([usize; WORD_LEN]),
}

/// Cells selected for the current attempt plus the error cue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    positions: Vec<usize>,
    error: bool,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        match self.positions.len() {
            0 => SelectionPhase::Idle,
            n if n < WORD_LEN => SelectionPhase::Selecting,
            _ => SelectionPhase::Evaluating,
        }
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Toggle `position` in or out of the current attempt
    ///
    /// Positions in the solved prefix or outside the grid are ignored, as is
    /// any input while a completed attempt is being evaluated.
    ///
    /// # Examples
    /// ```
    /// use quizwordz::core::{Grid, Selection, Toggle};
    ///
    /// let grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
    /// let mut selection = Selection::new();
    /// assert_eq!(selection.toggle(3, &grid), Toggle::Added);
    /// assert_eq!(selection.toggle(3, &grid), Toggle::Removed);
    /// assert!(selection.positions().is_empty());
    /// ```
    pub fn toggle(&mut self, position: usize, grid: &Grid) -> Toggle {
        if !grid.is_active(position) || self.phase() == SelectionPhase::Evaluating {
            return Toggle::Ignored;
        }

        if let Some(index) = self.positions.iter().position(|&p| p == position) {
            self.positions.remove(index);
            return Toggle::Removed;
        }

        self.positions.push(position);
        match <[usize; WORD_LEN]>::try_from(self.positions.as_slice()) {
            Ok(attempt) => Toggle::Completed(attempt),
            Err(_) => Toggle::Added,
        }
    }

    /// Letters at the selected positions, in selection order
    #[must_use]
    pub fn spelled(&self, grid: &Grid) -> Vec<u8> {
        self.positions
            .iter()
            .filter_map(|&p| grid.letter_at(p))
            .collect()
    }

    /// Mark the completed attempt as rejected; positions stay until cleared
    pub fn reject(&mut self) {
        self.error = true;
    }

    /// Drop every selected position and the error cue
    pub fn clear(&mut self) {
        self.positions.clear();
        self.error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn grid() -> Grid {
        Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap()
    }

    #[test]
    fn starts_idle() {
        let selection = Selection::new();
        assert_eq!(selection.phase(), SelectionPhase::Idle);
        assert!(!selection.has_error());
    }

    #[test]
    fn collects_up_to_five() {
        let grid = grid();
        let mut selection = Selection::new();
        for p in 0..4 {
            assert_eq!(selection.toggle(p, &grid), Toggle::Added);
            assert_eq!(selection.phase(), SelectionPhase::Selecting);
        }
        assert_eq!(selection.toggle(4, &grid), Toggle::Completed([0, 1, 2, 3, 4]));
        assert_eq!(selection.spelled(&grid), b"BLACK");
    }

    #[test]
    fn selection_order_is_spelling_order() {
        let grid = grid();
        let mut selection = Selection::new();
        for p in [4, 3, 2, 1] {
            selection.toggle(p, &grid);
        }
        assert_eq!(selection.toggle(0, &grid), Toggle::Completed([4, 3, 2, 1, 0]));
        assert_eq!(selection.spelled(&grid), b"KCALB");
    }

    #[test]
    fn toggle_off_returns_to_idle() {
        let grid = grid();
        let mut selection = Selection::new();
        selection.toggle(7, &grid);
        selection.toggle(9, &grid);
        assert_eq!(selection.toggle(7, &grid), Toggle::Removed);
        assert_eq!(selection.positions(), &[9]);
        assert_eq!(selection.toggle(9, &grid), Toggle::Removed);
        assert_eq!(selection.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn ignores_solved_prefix_and_out_of_range() {
        let mut grid = grid();
        grid.pin_word(&Word::new("BLACK").unwrap()).unwrap();
        let mut selection = Selection::new();
        assert_eq!(selection.toggle(0, &grid), Toggle::Ignored);
        assert_eq!(selection.toggle(4, &grid), Toggle::Ignored);
        assert_eq!(selection.toggle(25, &grid), Toggle::Ignored);
        assert_eq!(selection.toggle(5, &grid), Toggle::Added);
    }

    #[test]
    fn evaluating_ignores_input_until_cleared() {
        let grid = grid();
        let mut selection = Selection::new();
        for p in 5..10 {
            selection.toggle(p, &grid);
        }
        selection.reject();
        assert_eq!(selection.phase(), SelectionPhase::Evaluating);
        assert!(selection.has_error());

        // Neither deselecting nor adding is allowed while the cue shows
        assert_eq!(selection.toggle(5, &grid), Toggle::Ignored);
        assert_eq!(selection.toggle(12, &grid), Toggle::Ignored);

        selection.clear();
        assert_eq!(selection.phase(), SelectionPhase::Idle);
        assert!(!selection.has_error());
    }
}
