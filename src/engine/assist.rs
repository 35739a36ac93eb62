//! Hint and solve assistance
//!
//! Both assists draw uniformly from the words not solved yet. The round
//! applies the result: a hint highlights a cell for a while, a solve takes the
//! same path as a correct manual selection.

use crate::core::{Grid, Word, WordSetDefinition};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Words of the set not yet solved, in definition order
#[must_use]
pub fn remaining_words<'a>(set: &'a WordSetDefinition, solved: &[Word]) -> Vec<&'a Word> {
    set.words()
        .iter()
        .filter(|word| !solved.contains(word))
        .collect()
}

/// Pick one unsolved word uniformly at random
pub fn pick_remaining<'a, R: Rng + ?Sized>(
    set: &'a WordSetDefinition,
    solved: &[Word],
    rng: &mut R,
) -> Option<&'a Word> {
    remaining_words(set, solved).choose(rng).copied()
}

/// Cell to highlight for `word`: the first active-zone cell holding its first letter
///
/// # Examples
/// ```
/// use quizwordz::core::{Grid, Word};
/// use quizwordz::engine::assist::hint_position;
///
/// let grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
/// let green = Word::new("GREEN").unwrap();
/// assert_eq!(hint_position(&grid, &green), Some(10));
/// ```
#[must_use]
pub fn hint_position(grid: &Grid, word: &Word) -> Option<usize> {
    grid.first_active_position_of(word.first_letter())
}
